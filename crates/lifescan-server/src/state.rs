use lifescan_predict::client::PredictionClient;

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub client: PredictionClient,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            client: PredictionClient::new(config.prediction_url.clone(), config.prediction_timeout),
        }
    }
}
