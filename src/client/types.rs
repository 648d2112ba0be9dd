use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Form-encoded body of a prediction call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    #[serde(rename = "total_sqft")]
    pub area: f64,
    #[serde(rename = "bhk")]
    pub bedrooms: u32,
    #[serde(rename = "bath")]
    pub bathrooms: u32,
    pub location: String,
}

/// What a 2xx JSON answer from the prediction endpoint means.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionResponse {
    Price(f64),
    Error(String),
    Invalid,
}

impl PredictionResponse {
    /// An `error` field wins over `estimated_price`; the service sends
    /// `"estimated_price": null` alongside its errors.
    pub fn from_value(value: &Value) -> Self {
        if let Some(message) = value.get("error").and_then(error_text) {
            return Self::Error(message);
        }

        match value.get("estimated_price").and_then(Value::as_f64) {
            Some(price) => Self::Price(price),
            None => Self::Invalid,
        }
    }
}

/// Text of an `error` field, or `None` when the field is empty, null, false or zero.
pub fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub locations: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
