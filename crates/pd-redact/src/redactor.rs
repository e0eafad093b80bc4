//! The redaction engine.
//!
//! A [`Redactor`] compiles one pattern per sensitive field and replaces
//! each `field=<value>` occurrence with `field=<token>`, where `<value>`
//! is the maximal run of characters up to the next separator or end of
//! string. The transform is pure: keys, non-sensitive values, and
//! separator placement are never altered.

use crate::error::{RedactionError, Result};
use crate::policy::FieldPolicy;
use once_cell::sync::Lazy;
use regex::Regex;

/// Rule-based redactor for delimited `key=value` log messages.
#[derive(Debug)]
pub struct Redactor {
    /// Field names paired with their compiled patterns, in the order
    /// they were supplied.
    rules: Vec<(String, Regex)>,
    token: String,
    separator: String,
}

impl Redactor {
    /// Compile a redactor for the given fields, token, and separator.
    ///
    /// Field names are escaped before compilation, so names containing
    /// regex metacharacters match as plain text.
    ///
    /// # Errors
    ///
    /// Returns [`RedactionError::InvalidConfiguration`] if the separator
    /// is empty or any field name is empty.
    pub fn new<I, S>(fields: I, token: &str, separator: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if separator.is_empty() {
            return Err(RedactionError::InvalidConfiguration(
                "separator must not be empty".to_string(),
            ));
        }

        let sep = regex::escape(separator);
        let mut rules = Vec::new();
        for field in fields {
            let field = field.as_ref();
            if field.is_empty() {
                return Err(RedactionError::InvalidConfiguration(
                    "field name must not be empty".to_string(),
                ));
            }

            let pattern = format!("{}=[^{}]*", regex::escape(field), sep);
            let re = Regex::new(&pattern)
                .map_err(|e| RedactionError::PatternError(e.to_string()))?;
            rules.push((field.to_string(), re));
        }

        Ok(Self {
            rules,
            token: token.to_string(),
            separator: separator.to_string(),
        })
    }

    /// Compile a redactor from a policy.
    pub fn from_policy(policy: &FieldPolicy) -> Result<Self> {
        Self::new(&policy.fields, &policy.token, &policy.separator)
    }

    /// Replace the value of every configured field occurrence in the
    /// message with the redaction token.
    ///
    /// Each field's pattern is applied in turn over the full message;
    /// matching is non-overlapping and greedy up to the next separator
    /// or end of string. Fields absent from the message are no-ops.
    pub fn redact(&self, message: &str) -> String {
        let mut message = message.to_string();
        for (field, re) in &self.rules {
            message = re
                .replace_all(&message, |_: &regex::Captures<'_>| {
                    format!("{}={}", field, self.token)
                })
                .into_owned();
        }
        message
    }

    /// The configured field names, in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(field, _)| field.as_str())
    }

    /// The configured redaction token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The configured separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

/// One-shot redaction: compile the fields and apply them to a single
/// message.
///
/// Prefer holding a [`Redactor`] when redacting repeatedly; this form
/// recompiles the patterns on every call.
pub fn redact_fields<I, S>(fields: I, token: &str, message: &str, separator: &str) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(Redactor::new(fields, token, separator)?.redact(message))
}

static DEFAULT_REDACTOR: Lazy<Redactor> = Lazy::new(|| {
    Redactor::from_policy(&FieldPolicy::default())
        .expect("default PII policy always compiles")
});

/// The process-wide redactor compiled from the default PII policy.
pub fn default_redactor() -> &'static Redactor {
    &DEFAULT_REDACTOR
}
