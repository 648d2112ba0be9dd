pub mod client;
pub mod config;
pub mod error;
pub mod form;

pub use error::{Error, Result};
