// Domain errors - Error types for the domain layer

use thiserror::Error;

/// Domain-specific error types
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// Timestamp text did not match hh:mm:ss[.fff] or mm:ss[.fff]
    #[error("Invalid timestamp: '{text}'. Expected hh:mm:ss or mm:ss with optional fractional seconds")]
    InvalidTimestamp { text: String },

    /// Media duration is missing or zero; validation cannot run without it
    #[error("Media duration is missing or zero; acquisition must complete before segment validation")]
    MissingDuration,

    /// Invalid arguments provided
    #[error("Bad arguments: {0}")]
    BadArgs(String),

    /// Required external tool is not on PATH
    #[error("Required tool not found on PATH: {0}")]
    ToolMissing(String),

    /// External tool ran but failed
    #[error("{tool} failed: {message}")]
    ToolFailed { tool: String, message: String },

    /// Moment-extraction API call failed
    #[error("Moment extraction API failure: {0}")]
    ApiFailure(String),

    /// Transcript file could not be interpreted
    #[error("Invalid transcript format: {0}")]
    TranscriptFormat(String),

    /// File system operation failed
    #[error("File system error: {0}")]
    FsFail(String),
}
