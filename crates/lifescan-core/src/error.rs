use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown model variant: {0}")]
    UnknownVariant(String),
}
