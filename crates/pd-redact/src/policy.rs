//! Redaction policy configuration.
//!
//! Defines which fields are sensitive, what token replaces their values,
//! and which separator delimits `key=value` pairs in a message.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Field names whose values are always considered PII.
pub const PII_FIELDS: [&str; 5] = ["name", "email", "phone", "ssn", "password"];

/// Token substituted for every sensitive value.
pub const REDACTION_TOKEN: &str = "***";

/// Default delimiter between `key=value` pairs.
pub const SEPARATOR: &str = ";";

/// Redaction policy: field set, token, and separator.
///
/// The field order is preserved as given so redaction output is
/// deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPolicy {
    /// Field names to redact.
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,

    /// Replacement token for sensitive values.
    #[serde(default = "default_token")]
    pub token: String,

    /// Delimiter between `key=value` pairs.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_fields() -> Vec<String> {
    PII_FIELDS.iter().map(|f| f.to_string()).collect()
}

fn default_token() -> String {
    REDACTION_TOKEN.to_string()
}

fn default_separator() -> String {
    SEPARATOR.to_string()
}

impl Default for FieldPolicy {
    fn default() -> Self {
        Self {
            fields: default_fields(),
            token: default_token(),
            separator: default_separator(),
        }
    }
}

impl FieldPolicy {
    /// Load a policy from a JSON file.
    ///
    /// Missing keys fall back to the PII defaults. Validation happens
    /// when the policy is compiled into a [`crate::Redactor`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let policy = serde_json::from_str(&content)?;
        Ok(policy)
    }
}
