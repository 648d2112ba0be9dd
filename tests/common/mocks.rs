use async_trait::async_trait;
use home_price_estimator::{
    Error, Result,
    client::{LocationList, PredictionClient, PredictionRequest, PredictionResponse},
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock prediction client for testing
#[derive(Debug)]
pub struct MockPredictionClient {
    pub locations: Arc<Mutex<Option<Result<LocationList>>>>,
    pub responses: Arc<Mutex<Vec<Result<PredictionResponse>>>>,
    pub requests: Arc<Mutex<Vec<PredictionRequest>>>,
    pub location_calls: Arc<Mutex<usize>>,
    pub delay: Option<Duration>,
}

impl MockPredictionClient {
    pub fn new() -> Self {
        Self {
            locations: Arc::new(Mutex::new(None)),
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            location_calls: Arc::new(Mutex::new(0)),
            delay: None,
        }
    }

    pub fn with_locations(self, names: &[&str]) -> Self {
        *self.locations.lock().unwrap() = Some(Ok(LocationList {
            locations: names.iter().map(|n| n.to_string()).collect(),
        }));
        self
    }

    pub fn with_location_error(self, error: Error) -> Self {
        *self.locations.lock().unwrap() = Some(Err(error));
        self
    }

    pub fn with_response(self, response: PredictionResponse) -> Self {
        self.responses.lock().unwrap().push(Ok(response));
        self
    }

    pub fn with_error(self, error: Error) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn get_requests(&self) -> Vec<PredictionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn location_calls(&self) -> usize {
        *self.location_calls.lock().unwrap()
    }
}

#[async_trait]
impl PredictionClient for MockPredictionClient {
    async fn get_location_names(&self) -> Result<LocationList> {
        *self.location_calls.lock().unwrap() += 1;

        self.locations
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(Error::client("No mock locations configured")))
    }

    async fn predict_home_price(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::client("No more mock responses available"));
        }

        responses.remove(0)
    }
}

impl Default for MockPredictionClient {
    fn default() -> Self {
        Self::new()
    }
}
