use std::result::Result as StdResult;

use klakie_config::ConfigError;
use klakie_domain::PeriodKindError;
use thiserror::Error;

/// Unified error type for ingestion, configuration and reporting.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Malformed entry at index {index}: {reason}")]
    MalformedEntry { index: usize, reason: String },
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, EngineError>;

impl From<PeriodKindError> for EngineError {
    fn from(err: PeriodKindError) -> Self {
        EngineError::InvalidInput(err.to_string())
    }
}
