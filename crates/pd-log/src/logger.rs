//! Loggers, sinks, and the logger registry.
//!
//! A [`Logger`] owns its handlers (formatter + sink pairs) and is
//! immutable after construction, so it can be shared freely behind an
//! `Arc`. The [`LoggerRegistry`] is an explicit, injectable
//! name-to-logger map with get-or-create semantics; tests construct
//! isolated registries instead of touching process-wide state.

use crate::error::Result;
use crate::format::{Formatter, RedactingFormatter};
use crate::record::{Level, LogRecord};
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock};

/// Name of the pre-wired user-data logger.
pub const USER_DATA_LOGGER: &str = "user_data";

/// A destination for rendered log lines.
pub trait Sink: Send + Sync {
    /// Write one rendered line. Implementations must issue a single
    /// write per call so concurrent events never interleave.
    fn emit(&self, line: &str) -> io::Result<()>;
}

/// Sink writing each line to a stream, serialized through a mutex.
pub struct StreamSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl StreamSink<io::Stderr> {
    /// Sink writing to stderr.
    pub fn stderr() -> Self {
        StreamSink::new(io::stderr())
    }
}

impl<W: Write + Send> StreamSink<W> {
    /// Sink writing to a custom stream.
    pub fn new(writer: W) -> Self {
        StreamSink {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> Sink for StreamSink<W> {
    fn emit(&self, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("sink writer poisoned"))?;
        writer.write_all(buf.as_bytes())
    }
}

struct Handler {
    formatter: Box<dyn Formatter>,
    sink: Box<dyn Sink>,
}

/// A named logger with a severity threshold and attached handlers.
///
/// The logger performs no redaction itself; that is entirely the
/// formatter's job during emission.
pub struct Logger {
    name: String,
    level: Level,
    propagate: bool,
    parent: Option<Arc<Logger>>,
    handlers: Vec<Handler>,
}

impl Logger {
    /// Create a logger with no handlers. Propagation is on by default,
    /// matching the behavior of a freshly created named logger.
    pub fn new(name: &str, level: Level) -> Self {
        Self {
            name: name.to_string(),
            level,
            propagate: true,
            parent: None,
            handlers: Vec::new(),
        }
    }

    /// Attach a formatter/sink pair.
    pub fn with_handler(
        mut self,
        formatter: impl Formatter + 'static,
        sink: impl Sink + 'static,
    ) -> Self {
        self.handlers.push(Handler {
            formatter: Box::new(formatter),
            sink: Box::new(sink),
        });
        self
    }

    /// Disable forwarding to the parent logger, so records are emitted
    /// by this logger's handlers only.
    pub fn without_propagation(mut self) -> Self {
        self.propagate = false;
        self
    }

    /// Set the parent this logger forwards to when propagation is on.
    pub fn with_parent(mut self, parent: Arc<Logger>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether records are forwarded to the parent logger.
    pub fn propagates(&self) -> bool {
        self.propagate
    }

    /// Number of attached handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit a message at the given level.
    ///
    /// Records below the severity threshold are dropped. A render
    /// failure aborts the record before anything reaches the sink.
    pub fn log(&self, level: Level, message: &str) -> Result<()> {
        if level < self.level {
            return Ok(());
        }
        let record = LogRecord::new(&self.name, level, message);
        self.dispatch(&record)
    }

    fn dispatch(&self, record: &LogRecord) -> Result<()> {
        for handler in &self.handlers {
            let line = handler.formatter.render(record)?;
            handler.sink.emit(&line)?;
        }
        if self.propagate {
            if let Some(parent) = &self.parent {
                parent.dispatch(record)?;
            }
        }
        Ok(())
    }

    pub fn debug(&self, message: &str) -> Result<()> {
        self.log(Level::Debug, message)
    }

    pub fn info(&self, message: &str) -> Result<()> {
        self.log(Level::Info, message)
    }

    pub fn warn(&self, message: &str) -> Result<()> {
        self.log(Level::Warn, message)
    }

    pub fn error(&self, message: &str) -> Result<()> {
        self.log(Level::Error, message)
    }
}

/// Name-to-logger map with get-or-create semantics.
///
/// Creation is idempotent: the build closure runs at most once per
/// name for the lifetime of the registry.
#[derive(Default)]
pub struct LoggerRegistry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the logger registered under `name`, creating it with
    /// `build` if absent.
    pub fn get_or_create<F>(&self, name: &str, build: F) -> Arc<Logger>
    where
        F: FnOnce() -> Logger,
    {
        let mut loggers = self
            .loggers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(logger) = loggers.get(name) {
            return Arc::clone(logger);
        }
        let logger = Arc::new(build());
        loggers.insert(name.to_string(), Arc::clone(&logger));
        logger
    }

    /// Look up a logger without creating it.
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(name)
            .cloned()
    }
}

/// Get-or-create the user-data logger in the given registry.
///
/// The logger is created with severity `Info`, propagation disabled,
/// and exactly one stderr sink wired to the PII redacting formatter.
/// Repeated calls return the same instance and never accumulate
/// handlers.
pub fn user_data_logger(registry: &LoggerRegistry) -> Arc<Logger> {
    registry.get_or_create(USER_DATA_LOGGER, || {
        Logger::new(USER_DATA_LOGGER, Level::Info)
            .without_propagation()
            .with_handler(RedactingFormatter::user_data(), StreamSink::stderr())
    })
}

static REGISTRY: OnceLock<LoggerRegistry> = OnceLock::new();

/// The process-wide logger registry.
pub fn global_registry() -> &'static LoggerRegistry {
    REGISTRY.get_or_init(LoggerRegistry::new)
}

/// Get-or-create the user-data logger in the process-wide registry.
pub fn get_logger() -> Arc<Logger> {
    user_data_logger(global_registry())
}
