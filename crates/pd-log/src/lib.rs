//! Redacting log pipeline for user data.
//!
//! Every record emitted through this crate is rendered to a single text
//! line and passed through the PII redactor from `pd-redact` before it
//! reaches a sink. The crate provides:
//!
//! - **Formatting**: a [`RedactingFormatter`] that renders
//!   `[TAG] logger LEVEL timestamp: message` and redacts the result.
//! - **Loggers**: an explicit [`LoggerRegistry`] with get-or-create
//!   semantics and a [`user_data_logger`] factory pre-wired with the
//!   fixed PII field set.
//! - **tracing integration**: a [`RedactingLayer`] so ordinary
//!   `tracing` events pass through the same redaction path.
//! - **Password hashing**: salted bcrypt delegation for storing user
//!   passwords; plaintext never enters the log pipeline.
//!
//! # Example
//!
//! ```no_run
//! use pd_log::get_logger;
//!
//! let logger = get_logger();
//! logger.info("name=John Doe;email=john@example.com;").unwrap();
//! // stderr: [USERDATA] user_data INFO <timestamp>: name=***;email=***;
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod layer;
pub mod logger;
pub mod password;
pub mod record;
pub mod rows;

pub use config::LogConfig;
pub use error::{LogError, Result};
pub use format::{Formatter, RedactingFormatter, DEFAULT_APP_TAG};
pub use layer::{init_logging, RedactingLayer};
pub use logger::{
    get_logger, global_registry, user_data_logger, Logger, LoggerRegistry, Sink, StreamSink,
    USER_DATA_LOGGER,
};
pub use password::{hash_password, hash_password_with_cost, is_valid};
pub use record::{Level, LogRecord};
pub use rows::{log_rows, row_message, RowSource};
