//! Record-to-text formatting with redaction.
//!
//! A [`RedactingFormatter`] first renders the record through the fixed
//! line template, then runs the rendered text through its redactor. The
//! record itself is never mutated.

use crate::error::{LogError, Result};
use crate::record::LogRecord;
use pd_redact::{FieldPolicy, Redactor};
use std::fmt::Write;

/// Tag prepended to every rendered line.
pub const DEFAULT_APP_TAG: &str = "USERDATA";

/// Renders a [`LogRecord`] to final text.
///
/// This is the seam between loggers and output: sinks hold a formatter
/// and never see an unrendered record.
pub trait Formatter: Send + Sync {
    /// Render the record to a single redacted line.
    fn render(&self, record: &LogRecord) -> Result<String>;
}

/// Formatter producing `[TAG] logger LEVEL timestamp: message`, with
/// sensitive field values replaced by the redaction token.
#[derive(Debug)]
pub struct RedactingFormatter {
    app_tag: String,
    redactor: Redactor,
}

impl RedactingFormatter {
    /// Create a formatter with an explicit tag and redactor.
    pub fn new(app_tag: &str, redactor: Redactor) -> Self {
        Self {
            app_tag: app_tag.to_string(),
            redactor,
        }
    }

    /// Formatter with an explicit tag and a custom redaction policy.
    ///
    /// Redactor configuration errors propagate unchanged.
    pub fn from_policy(app_tag: &str, policy: &FieldPolicy) -> Result<Self> {
        Ok(Self::new(app_tag, Redactor::from_policy(policy)?))
    }

    /// Formatter with the given tag and the fixed PII field set.
    pub fn with_tag(app_tag: &str) -> Self {
        let redactor = Redactor::from_policy(&FieldPolicy::default())
            .expect("default PII policy always compiles");
        Self::new(app_tag, redactor)
    }

    /// The fixed user-data configuration: default tag, PII field set,
    /// `***` token, `;` separator.
    pub fn user_data() -> Self {
        Self::with_tag(DEFAULT_APP_TAG)
    }

    /// The tag prepended to rendered lines.
    pub fn app_tag(&self) -> &str {
        &self.app_tag
    }
}

impl Formatter for RedactingFormatter {
    fn render(&self, record: &LogRecord) -> Result<String> {
        let mut line = String::new();
        write!(
            line,
            "[{}] {} {} {}: {}",
            self.app_tag,
            record.logger,
            record.level,
            record.timestamp.to_rfc3339(),
            record.message
        )
        .map_err(|e| LogError::Render(e.to_string()))?;

        Ok(self.redactor.redact(&line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Level;

    #[test]
    fn renders_template_and_redacts() {
        let formatter = RedactingFormatter::user_data();
        let record = LogRecord::new("user_data", Level::Info, "ssn=123-45-6789;");

        let line = formatter.render(&record).unwrap();

        assert!(line.starts_with("[USERDATA] user_data INFO "));
        assert!(line.contains("ssn=***;"));
        assert!(!line.contains("123-45-6789"));
    }

    #[test]
    fn non_sensitive_message_passes_through() {
        let formatter = RedactingFormatter::user_data();
        let record = LogRecord::new("user_data", Level::Warn, "ip=10.0.0.1;uid=7;");

        let line = formatter.render(&record).unwrap();
        assert!(line.contains("WARN"));
        assert!(line.ends_with(": ip=10.0.0.1;uid=7;"));
    }

    #[test]
    fn record_is_not_mutated() {
        let formatter = RedactingFormatter::user_data();
        let record = LogRecord::new("user_data", Level::Info, "email=a@b.c;");

        let _ = formatter.render(&record).unwrap();
        assert_eq!(record.message, "email=a@b.c;");
    }

    #[test]
    fn custom_tag_appears_in_output() {
        let formatter = RedactingFormatter::with_tag("AUDIT");
        let record = LogRecord::new("user_data", Level::Error, "password=x;");

        let line = formatter.render(&record).unwrap();
        assert!(line.starts_with("[AUDIT] "));
        assert!(line.contains("password=***;"));
    }

    #[test]
    fn formatter_is_debug_formattable() {
        let formatter = RedactingFormatter::user_data();
        let rendered = format!("{:?}", formatter);
        assert!(rendered.contains("RedactingFormatter"));
    }

    #[test]
    fn invalid_policy_propagates_as_redaction_error() {
        let policy = FieldPolicy {
            fields: vec!["name".to_string()],
            token: "***".to_string(),
            separator: String::new(),
        };

        let err = RedactingFormatter::from_policy("AUDIT", &policy).unwrap_err();
        assert!(matches!(err, crate::LogError::Redaction(_)));
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let formatter = RedactingFormatter::user_data();
        let record = LogRecord::new("user_data", Level::Info, "uid=1;");

        let line = formatter.render(&record).unwrap();
        // [USERDATA] user_data INFO <ts>: uid=1;
        let ts = line.split_whitespace().nth(3).unwrap().trim_end_matches(':');
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok(), "bad ts: {}", ts);
    }
}
