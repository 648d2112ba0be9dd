use crate::{Error, Result, client::PredictionResponse, client::error_text};
use serde_json::Value;

pub const PRICE_UNIT: &str = "Lakh";

pub const CALCULATING: &str = "Calculating...";
pub const INVALID_RESPONSE: &str = "Invalid response from server";
pub const COULD_NOT_GET_PRICE: &str = "could not get price";
pub const SERVER_NOT_RESPONDING: &str =
    "Server is not responding. Please check if the server is running.";
pub const ENDPOINT_NOT_FOUND: &str =
    "API endpoint not found. Please check the server configuration.";
pub const SERVER_ERROR: &str = "Server error. Check server logs for details.";

/// What the output element shows after one step of an interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Display {
    Progress,
    Price(f64),
    Failure(String),
}

impl Display {
    /// Plain text, as a reader of the page would see it.
    pub fn text(&self) -> String {
        match self {
            Self::Progress => CALCULATING.to_string(),
            Self::Price(price) => format!("{} {}", price, PRICE_UNIT),
            Self::Failure(message) => format!("Error: {}", message),
        }
    }

    pub fn to_html(&self) -> String {
        format!("<h2>{}</h2>", escape_html(&self.text()))
    }
}

/// Maps the result of a prediction call to what the user sees.
pub fn outcome(result: &Result<PredictionResponse>) -> Display {
    match result {
        Ok(PredictionResponse::Price(price)) => Display::Price(*price),
        Ok(PredictionResponse::Error(message)) => Display::Failure(message.clone()),
        Ok(PredictionResponse::Invalid) => Display::Failure(INVALID_RESPONSE.to_string()),
        Err(Error::Transport { status, body }) => {
            Display::Failure(transport_failure_message(*status, body))
        }
        Err(_) => Display::Failure(COULD_NOT_GET_PRICE.to_string()),
    }
}

/// A parsable body decides the message on its own, even without an
/// `error` field. Status fallbacks apply to unparsable and `null` bodies.
pub fn transport_failure_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) if !value.is_null() => value
            .get("error")
            .and_then(error_text)
            .unwrap_or_else(|| COULD_NOT_GET_PRICE.to_string()),
        _ => match status {
            0 => SERVER_NOT_RESPONDING.to_string(),
            404 => ENDPOINT_NOT_FOUND.to_string(),
            500 => SERVER_ERROR.to_string(),
            _ => COULD_NOT_GET_PRICE.to_string(),
        },
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
