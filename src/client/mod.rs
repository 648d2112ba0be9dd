mod http;
mod types;

pub use http::{HttpPredictionClient, PredictionClient};
pub use types::*;
