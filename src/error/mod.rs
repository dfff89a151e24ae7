//! Error handling module for ReelCut

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for ReelCut operations
#[derive(Error, Debug)]
pub enum ReelError {
    /// Engine or pipeline failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ReelCut operations
pub type ReelResult<T> = std::result::Result<T, ReelError>;
