use thiserror::Error;

/// Main error type for the bem-classes crate
#[derive(Debug, Error)]
pub enum BemError {
    #[error("Invalid base class {0:?}: sanitizes to an empty token")]
    InvalidBase(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BemError>;
