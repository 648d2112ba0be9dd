use super::types::*;
use crate::{Error, Result, config::ServiceConfig};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

#[async_trait]
pub trait PredictionClient: Send + Sync {
    async fn get_location_names(&self) -> Result<LocationList>;

    async fn predict_home_price(&self, request: &PredictionRequest) -> Result<PredictionResponse>;
}

pub struct HttpPredictionClient {
    client: reqwest::Client,
    locations_url: String,
    predict_url: String,
}

impl HttpPredictionClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            locations_url: config.locations_url(),
            predict_url: config.predict_url(),
        })
    }

    /// Reads a response into JSON. Anything short of a 2xx JSON body is
    /// reported as `Error::Transport` with the raw body attached.
    async fn read_json(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!("Failed to read response body (status {}): {}", status, e);
            Error::transport(status.as_u16(), "")
        })?;

        if !status.is_success() {
            warn!("Request failed with status {}: {}", status, body);
            return Err(Error::transport(status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!("Response with status {} is not JSON: {}", status, e);
            Error::transport(status.as_u16(), body)
        })
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn get_location_names(&self) -> Result<LocationList> {
        debug!("Fetching location names from {}", self.locations_url);

        let response = self
            .client
            .get(&self.locations_url)
            .send()
            .await
            .map_err(|e| {
                warn!("Location request failed: {}", e);
                Error::transport(0, "")
            })?;

        let value = Self::read_json(response).await?;
        if value.is_null() {
            return Err(Error::client("Location response was empty"));
        }

        let list: LocationList = serde_json::from_value(value)?;
        debug!("Received {} location names", list.locations.len());

        Ok(list)
    }

    async fn predict_home_price(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        debug!(
            "Requesting prediction: sqft={}, bhk={}, bath={}, location={}",
            request.area, request.bedrooms, request.bathrooms, request.location
        );

        let response = self
            .client
            .post(&self.predict_url)
            .form(request)
            .send()
            .await
            .map_err(|e| {
                warn!("Prediction request failed: {}", e);
                Error::transport(0, "")
            })?;

        let value = Self::read_json(response).await?;
        debug!("Response data: {}", value);

        Ok(PredictionResponse::from_value(&value))
    }
}
