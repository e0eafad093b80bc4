//! tracing integration.
//!
//! [`RedactingLayer`] routes ordinary `tracing` events through the same
//! redacting formatter used by the logger pipeline, so a stray
//! `tracing::info!` with PII in its message cannot leak either.

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::Utc;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LogConfig;
use crate::format::{Formatter, RedactingFormatter};
use crate::record::LogRecord;

/// A visitor that extracts the message field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        }
    }
}

/// Tracing layer that emits redacted text lines.
pub struct RedactingLayer<W = io::Stderr> {
    formatter: RedactingFormatter,
    writer: Mutex<W>,
}

impl RedactingLayer<io::Stderr> {
    /// Layer writing to stderr with the fixed user-data formatter.
    pub fn stderr() -> Self {
        RedactingLayer::new(io::stderr())
    }
}

impl<W: Write> RedactingLayer<W> {
    /// Layer with a custom writer and the fixed user-data formatter.
    pub fn new(writer: W) -> Self {
        RedactingLayer {
            formatter: RedactingFormatter::user_data(),
            writer: Mutex::new(writer),
        }
    }

    /// Replace the formatter.
    pub fn with_formatter(mut self, formatter: RedactingFormatter) -> Self {
        self.formatter = formatter;
        self
    }
}

impl<S, W> Layer<S> for RedactingLayer<W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: Write + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let record = LogRecord {
            logger: event.metadata().target().to_string(),
            level: (*event.metadata().level()).into(),
            timestamp: Utc::now(),
            message,
        };

        // A record that fails to render emits nothing; a partial line
        // is never written.
        let Ok(line) = self.formatter.render(&record) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }
}

/// Initialize the tracing subscriber with a redacting stderr layer.
///
/// Must be called once at startup. `RUST_LOG` takes precedence over the
/// configured level when set.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}", config.level).to_lowercase()));

    let layer = RedactingLayer::stderr()
        .with_formatter(RedactingFormatter::with_tag(&config.app_tag));

    tracing_subscriber::registry().with(filter).with(layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn make_buffer_layer() -> (
        Arc<Mutex<Vec<u8>>>,
        impl Layer<tracing_subscriber::Registry>,
    ) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        struct BufWriter(Arc<Mutex<Vec<u8>>>);
        impl Write for BufWriter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().write(buf)
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let layer = RedactingLayer::new(BufWriter(buffer.clone()));
        (buffer, layer)
    }

    #[test]
    fn layer_redacts_event_messages() {
        let (buffer, layer) = make_buffer_layer();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "user_data", message = "ssn=123-45-6789;uid=4;");
        });

        let output = buffer.lock().unwrap();
        let line = String::from_utf8_lossy(&output);
        assert!(line.contains("ssn=***;uid=4;"));
        assert!(!line.contains("123-45-6789"));
    }

    #[test]
    fn layer_renders_the_line_template() {
        let (buffer, layer) = make_buffer_layer();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "user_data", message = "email=a@b.c;");
        });

        let output = buffer.lock().unwrap();
        let line = String::from_utf8_lossy(&output);
        assert!(line.starts_with("[USERDATA] user_data WARN "));
        assert!(line.contains("email=***;"));
    }

    #[test]
    fn layer_formats_interpolated_messages() {
        let (buffer, layer) = make_buffer_layer();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "user_data", "name={};", "John Doe");
        });

        let output = buffer.lock().unwrap();
        let line = String::from_utf8_lossy(&output);
        assert!(line.contains("name=***;"));
        assert!(!line.contains("John Doe"));
    }

    #[test]
    fn event_without_message_emits_nothing() {
        let (buffer, layer) = make_buffer_layer();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "user_data", uid = 7);
        });

        let output = buffer.lock().unwrap();
        assert!(output.is_empty());
    }
}
