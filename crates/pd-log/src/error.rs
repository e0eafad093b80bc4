//! Error types for the logging pipeline.

use thiserror::Error;

/// Result type for logging operations.
pub type Result<T> = std::result::Result<T, LogError>;

/// Errors that can occur while formatting or emitting log records.
#[derive(Error, Debug)]
pub enum LogError {
    /// The record could not be rendered to text. The sink emits nothing
    /// when this happens; a partial line is never written.
    #[error("render error: {0}")]
    Render(String),

    /// Redactor configuration failure, propagated unchanged.
    #[error(transparent)]
    Redaction(#[from] pd_redact::RedactionError),

    /// Password hashing failure from the bcrypt collaborator.
    #[error("password hash error: {0}")]
    Password(#[from] bcrypt::BcryptError),

    /// I/O error while writing to a sink.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
