//! Error types for the redaction engine.

use thiserror::Error;

/// Result type for redaction operations.
pub type Result<T> = std::result::Result<T, RedactionError>;

/// Errors that can occur during redaction setup.
///
/// Redaction itself never fails on well-formed input; every variant here
/// is a configuration-time error.
#[derive(Error, Debug)]
pub enum RedactionError {
    /// The supplied configuration is unusable (empty separator or empty
    /// field name). Fatal at construction time, not recoverable per-call.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Failed to compile a field pattern.
    #[error("pattern error: {0}")]
    PatternError(String),

    /// I/O error while reading a policy file.
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    /// Policy file parsing error.
    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
}
