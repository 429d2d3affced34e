use thiserror::Error;

/// Every way the prediction service can be unavailable. None of these are
/// fatal to a submission: the caller falls back to local scoring.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("prediction service timed out")]
    Timeout,

    #[error("prediction service unreachable: {0}")]
    Transport(String),

    #[error("prediction service returned HTTP {0}")]
    Status(u16),

    #[error("prediction service rejected the request: {0}")]
    Rejected(String),

    #[error("malformed response from prediction service: {0}")]
    Malformed(String),

    #[error("chat message is empty")]
    EmptyMessage,
}

impl From<ureq::Error> for PredictError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Timeout(_) => PredictError::Timeout,
            ureq::Error::StatusCode(status) => PredictError::Status(status),
            ureq::Error::Json(e) => PredictError::Malformed(e.to_string()),
            other => PredictError::Transport(other.to_string()),
        }
    }
}
