use crate::client::PredictionRequest;
use thiserror::Error;

/// Returned by the radio readers when no choice is checked.
pub const UNSELECTED: i32 = -1;

/// Raw values read off the surface for one submit.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInputs {
    pub location: Option<String>,
    pub sqft: Option<String>,
    pub bedrooms: i32,
    pub bathrooms: i32,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please select a location")]
    MissingLocation,

    #[error("Please enter a valid area")]
    InvalidArea,

    #[error("Please select BHK and Bath")]
    MissingRooms,
}

/// Checks location, then area, then rooms. The first failure is returned.
pub fn validate(inputs: &FormInputs) -> Result<PredictionRequest, ValidationError> {
    let location = match inputs.location.as_deref() {
        Some(location) if !location.is_empty() => location,
        _ => return Err(ValidationError::MissingLocation),
    };

    let area = inputs
        .sqft
        .as_deref()
        .and_then(parse_area)
        .ok_or(ValidationError::InvalidArea)?;

    if inputs.bedrooms <= 0 || inputs.bathrooms <= 0 {
        return Err(ValidationError::MissingRooms);
    }

    Ok(PredictionRequest {
        area,
        bedrooms: inputs.bedrooms as u32,
        bathrooms: inputs.bathrooms as u32,
        location: location.to_string(),
    })
}

fn parse_area(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|area| area.is_finite() && *area > 0.0)
}
