use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub form: FormLayout,
    #[serde(default)]
    pub logs: LogsConfig,
}

/// Where the prediction service lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_locations_path")]
    pub locations_path: String,
    #[serde(default = "default_predict_path")]
    pub predict_path: String,
}

/// Element ids and radio group names the controller reads from and writes to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormLayout {
    #[serde(default = "default_sqft_id")]
    pub sqft_id: String,
    #[serde(default = "default_locations_id")]
    pub locations_id: String,
    #[serde(default = "default_output_id")]
    pub output_id: String,
    #[serde(default = "default_estimate_button_id")]
    pub estimate_button_id: String,
    #[serde(default = "default_bedrooms_group")]
    pub bedrooms_group: String,
    #[serde(default = "default_bathrooms_group")]
    pub bathrooms_group: String,
    #[serde(default = "default_choices")]
    pub bedroom_choices: Vec<u32>,
    #[serde(default = "default_choices")]
    pub bathroom_choices: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl ServiceConfig {
    pub fn locations_url(&self) -> String {
        join_url(&self.base_url, &self.locations_path)
    }

    pub fn predict_url(&self) -> String {
        join_url(&self.base_url, &self.predict_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            locations_path: default_locations_path(),
            predict_path: default_predict_path(),
        }
    }
}

impl Default for FormLayout {
    fn default() -> Self {
        Self {
            sqft_id: default_sqft_id(),
            locations_id: default_locations_id(),
            output_id: default_output_id(),
            estimate_button_id: default_estimate_button_id(),
            bedrooms_group: default_bedrooms_group(),
            bathrooms_group: default_bathrooms_group(),
            bedroom_choices: default_choices(),
            bathroom_choices: default_choices(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_locations_path() -> String {
    "/api/get_location_names".to_string()
}

fn default_predict_path() -> String {
    "/api/predict_home_price".to_string()
}

fn default_sqft_id() -> String {
    "uiSqft".to_string()
}

fn default_locations_id() -> String {
    "uiLocations".to_string()
}

fn default_output_id() -> String {
    "uiEstimatedPrice".to_string()
}

fn default_estimate_button_id() -> String {
    "uiEstimatePrice".to_string()
}

fn default_bedrooms_group() -> String {
    "uiBHK".to_string()
}

fn default_bathrooms_group() -> String {
    "uiBathrooms".to_string()
}

fn default_choices() -> Vec<u32> {
    vec![1, 2, 3, 4, 5]
}

fn default_log_level() -> String {
    "info".to_string()
}
