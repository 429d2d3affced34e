use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use lifescan_core::models::prediction::{ChatRequest, ChatResponse, NewConversation};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct NewConversationRequest {
    #[serde(default = "default_user")]
    user_id: String,
}

fn default_user() -> String {
    "default".to_string()
}

pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let client = state.client.clone();
    let response = tokio::task::spawn_blocking(move || {
        client.chat(&request.message, &request.conversation_id)
    })
    .await??;
    Ok(Json(response))
}

pub async fn new_conversation(
    State(state): State<AppState>,
    Json(request): Json<NewConversationRequest>,
) -> Result<Json<NewConversation>, ApiError> {
    let client = state.client.clone();
    let conversation =
        tokio::task::spawn_blocking(move || client.new_conversation(&request.user_id)).await??;
    Ok(Json(conversation))
}
