//! Field-based PII redaction for log messages.
//!
//! This crate provides a single, reusable redaction engine that replaces
//! the values of sensitive `key=value` fields in delimited log messages
//! before they reach any output surface.
//!
//! # Key Features
//!
//! - **Field-aware redaction**: Only the values of configured field names
//!   are replaced; keys, separators, and everything else stay untouched.
//! - **Literal field matching**: Field names are escaped before pattern
//!   compilation, so names containing regex metacharacters behave as
//!   plain text.
//! - **Idempotent**: Redacting an already-redacted message is a no-op.
//! - **Configurable policy**: The field set, redaction token, and
//!   separator load from a JSON policy file or fall back to the fixed
//!   PII defaults.
//!
//! # Example
//!
//! ```
//! use pd_redact::Redactor;
//!
//! let redactor = Redactor::new(["name", "email"], "***", ";").unwrap();
//! let out = redactor.redact("name=John Doe;email=john@example.com;uid=7;");
//! assert_eq!(out, "name=***;email=***;uid=7;");
//! ```

pub mod error;
pub mod policy;
pub mod redactor;

pub use error::{RedactionError, Result};
pub use policy::{FieldPolicy, PII_FIELDS, REDACTION_TOKEN, SEPARATOR};
pub use redactor::{default_redactor, redact_fields, Redactor};
