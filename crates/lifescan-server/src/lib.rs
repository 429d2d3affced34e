//! lifescan-server
//!
//! HTTP surface over the questionnaire engine, the fallback risk model and
//! the prediction service client.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/questionnaires", get(routes::questionnaires::list_questionnaires))
        .route(
            "/questionnaires/{variant}",
            get(routes::questionnaires::get_questionnaire_detail),
        )
        .route(
            "/questionnaires/{variant}/validate",
            post(routes::questionnaires::validate_field),
        )
        .route(
            "/questionnaires/{variant}/check",
            post(routes::questionnaires::check_form),
        )
        .route(
            "/questionnaires/{variant}/score",
            post(routes::questionnaires::score_answers),
        )
        .route(
            "/questionnaires/{variant}/assess",
            post(routes::questionnaires::assess_answers),
        )
        .route("/chat", post(routes::chat::send_message))
        .route("/chat/new", post(routes::chat::new_conversation))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
