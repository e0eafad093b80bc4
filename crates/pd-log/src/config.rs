//! Logging configuration.
//!
//! Supports configuration via environment variables (`PD_LOG`,
//! `RUST_LOG`, `PD_LOG_TAG`) with caller overrides taking final
//! precedence.

use crate::format::DEFAULT_APP_TAG;
use crate::record::Level;

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum severity for emitted records.
    pub level: Level,
    /// Tag prepended to every rendered line.
    pub app_tag: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: Level::Info,
            app_tag: DEFAULT_APP_TAG.to_string(),
        }
    }
}

impl LogConfig {
    /// Create config from environment and caller overrides.
    ///
    /// `PD_LOG` takes precedence over `RUST_LOG`; an explicit
    /// `cli_level` wins over both.
    pub fn from_env(cli_level: Option<Level>) -> Self {
        let mut config = LogConfig::default();

        if let Ok(val) = std::env::var("PD_LOG") {
            if let Ok(level) = val.parse::<Level>() {
                config.level = level;
            }
        } else if let Ok(val) = std::env::var("RUST_LOG") {
            if let Ok(level) = val.parse::<Level>() {
                config.level = level;
            }
        }

        if let Ok(val) = std::env::var("PD_LOG_TAG") {
            if !val.is_empty() {
                config.app_tag = val;
            }
        }

        if let Some(level) = cli_level {
            config.level = level;
        }

        config
    }

    /// Set the minimum severity.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the line tag.
    pub fn with_app_tag(mut self, app_tag: &str) -> Self {
        self.app_tag = app_tag.to_string();
        self
    }
}
