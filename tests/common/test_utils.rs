use home_price_estimator::{
    Result,
    client::PredictionClient,
    config::FormLayout,
    form::{FormController, MemorySurface, Surface},
};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// A controller over the standard form layout, with its surface exposed.
pub fn create_test_controller(
    client: Arc<dyn PredictionClient>,
) -> (FormController, Arc<MemorySurface>) {
    let layout = FormLayout::default();
    let surface = Arc::new(MemorySurface::with_form(&layout));
    let controller = FormController::new(client, surface.clone(), layout);
    (controller, surface)
}

/// Fills the standard form with a complete, valid set of answers.
pub fn fill_valid_form(surface: &MemorySurface) {
    surface
        .replace_options(
            "uiLocations",
            &["Ejipura".to_string(), "Kalhalli".to_string()],
        )
        .unwrap();
    surface.set_value("uiLocations", "Ejipura").unwrap();
    surface.set_value("uiSqft", "1000").unwrap();
    surface.check("uiBHK", "2").unwrap();
    surface.check("uiBathrooms", "2").unwrap();
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
service:
  base_url: "http://10.0.0.5:8000/"
  predict_path: "/v2/predict"

form:
  output_id: "result"
  bedroom_choices: [1, 2, 3]

logs:
  level: "debug"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
service:
  base_url: ["not", "a", "string"]

form:
  bedroom_choices: "many"
"#;
