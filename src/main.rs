use anyhow::Result;
use home_price_estimator::{
    client::HttpPredictionClient,
    config::{self, FormLayout},
    form::{FormController, MemorySurface},
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))?,
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!("Starting home price estimator against {}", config.service.base_url);

    let client = Arc::new(HttpPredictionClient::new(&config.service)?);
    let surface = Arc::new(MemorySurface::with_form(&config.form));
    let controller = FormController::new(client, surface.clone(), config.form);
    let layout = controller.layout();

    if let Err(e) = controller.on_load().await {
        eprintln!("Could not load locations: {}", e);
    }

    let locations = surface.options(&layout.locations_id);
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(format_locations(&locations).as_bytes())
        .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let Some(location) = prompt(&mut lines, "Location (name or number, q to quit): ").await?
        else {
            break;
        };
        if location == "q" {
            break;
        }
        let Some(sqft) = prompt(&mut lines, "Area (sqft): ").await? else {
            break;
        };
        let Some(bedrooms) = prompt(&mut lines, "BHK: ").await? else {
            break;
        };
        let Some(bathrooms) = prompt(&mut lines, "Bathrooms: ").await? else {
            break;
        };

        fill_form(
            &surface,
            layout,
            &locations,
            &location,
            &sqft,
            &bedrooms,
            &bathrooms,
        )?;

        controller.on_activate(&layout.estimate_button_id).await;

        let output = surface.text(&layout.output_id).unwrap_or_default();
        stdout.write_all(format!("{}\n\n", output).as_bytes()).await?;
    }

    info!("Estimator finished");
    Ok(())
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Result<Option<String>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(label.as_bytes()).await?;
    stdout.flush().await?;

    Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
}

fn format_locations(locations: &[String]) -> String {
    if locations.is_empty() {
        return "No locations available.\n".to_string();
    }

    let mut listing = String::from("Locations:\n");
    for (i, name) in locations.iter().enumerate() {
        listing.push_str(&format!("{:>4}. {}\n", i + 1, name));
    }
    listing
}

/// Copies one round of answers onto the surface. Unknown room counts
/// leave their group unchecked so the controller reports them.
fn fill_form(
    surface: &MemorySurface,
    layout: &FormLayout,
    locations: &[String],
    location: &str,
    sqft: &str,
    bedrooms: &str,
    bathrooms: &str,
) -> Result<()> {
    let location = location
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| locations.get(i))
        .map(String::as_str)
        .unwrap_or(location);

    surface.set_value(&layout.locations_id, location)?;
    surface.set_value(&layout.sqft_id, sqft)?;

    for (group, choice) in [
        (&layout.bedrooms_group, bedrooms),
        (&layout.bathrooms_group, bathrooms),
    ] {
        if surface.check(group, choice).is_err() {
            surface.uncheck_all(group);
        }
    }

    Ok(())
}
