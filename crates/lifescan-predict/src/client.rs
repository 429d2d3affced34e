use std::time::Duration;

use lifescan_core::models::answers::AnswerSet;
use lifescan_core::models::prediction::{
    ChatRequest, ChatResponse, NewConversation, PredictionResponse, ServiceHealth,
};
use lifescan_core::models::variant::ModelVariant;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::PredictError;

/// Upper bound on a questionnaire prediction round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Anything that can turn a complete answer set into a service prediction.
pub trait PredictionService: Send + Sync {
    fn predict(
        &self,
        variant: ModelVariant,
        answers: &AnswerSet,
    ) -> Result<PredictionResponse, PredictError>;
}

/// HTTP client for the prediction and chat service.
#[derive(Clone)]
pub struct PredictionClient {
    agent: ureq::Agent,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: config.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn post<B, T>(&self, path: &str, body: &B) -> Result<T, PredictError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(url = %url, "POST");
        let mut response = self.agent.post(&url).send_json(body)?;
        Ok(response.body_mut().read_json::<T>()?)
    }

    pub fn health(&self) -> Result<ServiceHealth, PredictError> {
        let url = self.url("/api/health");
        let mut response = self.agent.get(&url).call()?;
        Ok(response.body_mut().read_json::<ServiceHealth>()?)
    }

    /// Send one chat message. Empty messages are rejected without a request.
    pub fn chat(&self, message: &str, conversation_id: &str) -> Result<ChatResponse, PredictError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(PredictError::EmptyMessage);
        }
        let request = ChatRequest {
            message: message.to_string(),
            conversation_id: conversation_id.to_string(),
        };
        let response: ChatResponse = self.post("/api/chat/send", &request)?;
        if !response.success {
            return Err(PredictError::Rejected("chat request was not successful".to_string()));
        }
        Ok(response)
    }

    pub fn new_conversation(&self, user_id: &str) -> Result<NewConversation, PredictError> {
        let body = serde_json::json!({ "user_id": user_id });
        let conversation: NewConversation = self.post("/api/chat/new", &body)?;
        if !conversation.success {
            return Err(PredictError::Rejected("could not start a conversation".to_string()));
        }
        info!(conversation_id = %conversation.conversation_id, "chat conversation started");
        Ok(conversation)
    }
}

impl PredictionService for PredictionClient {
    fn predict(
        &self,
        variant: ModelVariant,
        answers: &AnswerSet,
    ) -> Result<PredictionResponse, PredictError> {
        let response: PredictionResponse = self.post(&format!("/api/predict/{variant}"), answers)?;
        if !response.success {
            return Err(PredictError::Rejected(
                response.error.unwrap_or_else(|| "server error".to_string()),
            ));
        }
        if !(0.0..=1.0).contains(&response.probability) {
            return Err(PredictError::Malformed(format!(
                "probability {} outside [0, 1]",
                response.probability
            )));
        }
        Ok(response)
    }
}
