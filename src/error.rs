//! Error types for cloud-detect.
//!
//! Detection never fails: a missing CLI is reported as absence, not as an
//! error. [`CloudDetectError`] only covers the outer surface (argument
//! resolution and output encoding).

use thiserror::Error;

/// Core error type for cloud-detect operations.
#[derive(Debug, Error)]
pub enum CloudDetectError {
    /// A provider name was requested that the registry does not know.
    #[error("Unknown provider '{name}' (known providers: {})", .known.join(", "))]
    UnknownProvider { name: String, known: Vec<String> },

    /// Failed to encode output as JSON.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for cloud-detect operations.
pub type Result<T> = std::result::Result<T, CloudDetectError>;
