use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error in {path}: {message}")]
    Serde { path: PathBuf, message: String },

    #[error("Invalid `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
