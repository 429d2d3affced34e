use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Body returned by the external prediction service for
/// `POST /api/predict/{variant}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionResponse {
    #[serde(default)]
    pub success: bool,
    /// Adjusted probability of the condition, in `[0, 1]`.
    #[serde(default)]
    pub probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(default)]
    pub factors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_info: Option<DebugInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Clinical adjustment details the service attaches to a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DebugInfo {
    #[serde(default)]
    pub was_adjusted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_probability: Option<f64>,
}

/// Body returned by `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub models: ModelAvailability,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModelAvailability {
    #[serde(default)]
    pub stroke: bool,
    #[serde(default)]
    pub heart: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatRequest {
    pub message: String,
    pub conversation_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub conversation_id: String,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewConversation {
    #[serde(default)]
    pub success: bool,
    pub conversation_id: String,
}
