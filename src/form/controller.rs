use super::display::{Display, outcome};
use super::surface::Surface;
use super::validate::{FormInputs, UNSELECTED, validate};
use crate::{Result, client::PredictionClient, config::FormLayout};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, warn};

/// Drives one estimator form: populates the location list, validates
/// submits and renders the prediction outcome into the output element.
pub struct FormController {
    client: Arc<dyn PredictionClient>,
    surface: Arc<dyn Surface>,
    layout: FormLayout,
    submit_wired: AtomicBool,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the prediction call finishes or is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl FormController {
    pub fn new(
        client: Arc<dyn PredictionClient>,
        surface: Arc<dyn Surface>,
        layout: FormLayout,
    ) -> Self {
        Self {
            client,
            surface,
            layout,
            submit_wired: AtomicBool::new(false),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn layout(&self) -> &FormLayout {
        &self.layout
    }

    pub fn is_submit_wired(&self) -> bool {
        self.submit_wired.load(Ordering::Acquire)
    }

    pub fn read_bedroom_count(&self) -> i32 {
        self.read_choice(&self.layout.bedrooms_group)
    }

    pub fn read_bathroom_count(&self) -> i32 {
        self.read_choice(&self.layout.bathrooms_group)
    }

    fn read_choice(&self, group: &str) -> i32 {
        let Some(checked) = self
            .surface
            .radio_group(group)
            .into_iter()
            .find(|input| input.checked)
        else {
            return UNSELECTED;
        };

        checked.value.trim().parse().unwrap_or_else(|_| {
            debug!(
                "Checked value '{}' in group '{}' is not an integer",
                checked.value, group
            );
            UNSELECTED
        })
    }

    pub fn read_inputs(&self) -> FormInputs {
        FormInputs {
            location: self.surface.value(&self.layout.locations_id),
            sqft: self.surface.value(&self.layout.sqft_id),
            bedrooms: self.read_bedroom_count(),
            bathrooms: self.read_bathroom_count(),
        }
    }

    /// Validates the form and, when it is valid, asks the service for a
    /// price. Returns the final display, or `None` when a prediction is
    /// already in flight and this submit was ignored.
    pub async fn on_submit(&self) -> Option<Display> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            warn!("Prediction already in flight, ignoring submit");
            return None;
        }
        let _guard = InFlight(&self.in_flight);

        let inputs = self.read_inputs();
        let request = match validate(&inputs) {
            Ok(request) => request,
            Err(e) => {
                debug!("Rejected form input: {}", e);
                let shown = Display::Failure(e.to_string());
                self.render(&shown);
                return Some(shown);
            }
        };

        self.render(&Display::Progress);

        let result = self.client.predict_home_price(&request).await;
        if let Err(ref e) = result {
            error!("Request failed: {}", e);
        }

        let shown = outcome(&result);
        info!("Estimate for {}: {}", request.location, shown.text());
        self.render(&shown);

        Some(shown)
    }

    /// Wires the estimate button, then replaces the location options
    /// with the names the service knows. Returns how many were added;
    /// on failure the options are left untouched.
    pub async fn on_load(&self) -> Result<usize> {
        if self.surface.contains(&self.layout.estimate_button_id) {
            self.submit_wired.store(true, Ordering::Release);
        } else {
            warn!(
                "Estimate button '{}' not found, submit is not wired",
                self.layout.estimate_button_id
            );
        }

        let list = self.client.get_location_names().await.map_err(|e| {
            warn!("Failed to load location names: {}", e);
            e
        })?;

        self.surface
            .replace_options(&self.layout.locations_id, &list.locations)?;
        info!("Loaded {} locations", list.locations.len());

        Ok(list.locations.len())
    }

    /// Activation of an element. Only the wired estimate button does anything.
    pub async fn on_activate(&self, id: &str) -> Option<Display> {
        if id != self.layout.estimate_button_id || !self.is_submit_wired() {
            debug!("Ignoring activation of '{}'", id);
            return None;
        }
        self.on_submit().await
    }

    fn render(&self, display: &Display) {
        if let Err(e) = self
            .surface
            .set_html(&self.layout.output_id, &display.to_html())
        {
            error!("Failed to render output: {}", e);
        }
    }
}
