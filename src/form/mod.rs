mod controller;
pub mod display;
mod surface;
mod validate;

pub use controller::FormController;
pub use display::{Display, outcome, transport_failure_message};
pub use surface::{ElementKind, MemorySurface, RadioInput, Surface};
pub use validate::{FormInputs, UNSELECTED, ValidationError, validate};
