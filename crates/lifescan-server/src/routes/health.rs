use axum::extract::State;
use axum::Json;
use serde::Serialize;

use lifescan_core::models::prediction::ModelAvailability;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthReport {
    status: &'static str,
    /// Whether the prediction service answered its own health check.
    prediction_service: bool,
    models: ModelAvailability,
}

/// Always 200: an offline prediction service only means fallback scoring.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    let client = state.client.clone();
    let upstream = tokio::task::spawn_blocking(move || client.health()).await;

    let (prediction_service, models) = match upstream {
        Ok(Ok(health)) => (true, health.models),
        Ok(Err(e)) => {
            tracing::debug!(error = %e, "prediction service health check failed");
            (false, ModelAvailability::default())
        }
        Err(e) => {
            tracing::error!(error = %e, "health check task failed");
            (false, ModelAvailability::default())
        }
    };

    Json(HealthReport {
        status: "ok",
        prediction_service,
        models,
    })
}
