//! Diagnostic logging setup.
//!
//! Game text is written to stdout; diagnostics go to stderr through
//! `tracing`. The default filter only lets warnings through so a normal game
//! shows no log lines. Set `RUST_LOG` (for example
//! `RUST_LOG=fourinarow_engine=debug,fourinarow_cli=debug`) to see moves,
//! rejected input and results.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
}

#[cfg(test)]
pub(crate) mod capture {
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;
    use tracing_subscriber::{Layer, Registry};

    /// One recorded event.
    #[derive(Debug, Clone)]
    pub struct LogEntry {
        pub level: Level,
        pub target: String,
        pub message: String,
        pub fields: Vec<(String, String)>,
    }

    impl LogEntry {
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        }
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        entries: Arc<Mutex<Vec<LogEntry>>>,
    }

    impl<S> Layer<S> for CaptureLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let metadata = event.metadata();
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);
            self.entries.lock().unwrap().push(LogEntry {
                level: *metadata.level(),
                target: metadata.target().to_string(),
                message: visitor.message.unwrap_or_default(),
                fields: visitor.fields,
            });
        }
    }

    #[derive(Default)]
    struct FieldVisitor {
        message: Option<String>,
        fields: Vec<(String, String)>,
    }

    impl tracing::field::Visit for FieldVisitor {
        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            if field.name() == "message" {
                self.message = Some(value.to_string());
            } else {
                let entry = (field.name().to_string(), value.to_string());
                self.fields.push(entry);
            }
        }

        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            let value = format!("{:?}", value);
            if field.name() == "message" {
                self.message = Some(value);
            } else {
                self.fields.push((field.name().to_string(), value));
            }
        }
    }

    /// Runs `f` with a thread-local subscriber and returns every event it
    /// emitted.
    pub fn capture<F: FnOnce()>(f: F) -> Vec<LogEntry> {
        let layer = CaptureLayer::default();
        let entries = Arc::clone(&layer.entries);
        let subscriber = Registry::default().with(layer);
        tracing::subscriber::with_default(subscriber, f);
        let captured = entries.lock().unwrap().clone();
        captured
    }
}
