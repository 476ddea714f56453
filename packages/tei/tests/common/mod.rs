//! Shared helpers for integration tests.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// One captured `tracing` event.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    /// Message and fields rendered as `name=value` pairs.
    pub rendered: String,
}

#[derive(Default)]
struct FieldRenderer(String);

impl Visit for FieldRenderer {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push_str(&format!("{}={:?}", field.name(), value));
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut renderer = FieldRenderer::default();
        event.record(&mut renderer);
        self.records.lock().unwrap().push(LogRecord {
            level: *event.metadata().level(),
            rendered: renderer.0,
        });
    }
}

/// Run `f` with a subscriber that records every event, returning its
/// result and the records.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<LogRecord>) {
    let layer = CaptureLayer::default();
    let records = Arc::clone(&layer.records);
    let subscriber = tracing_subscriber::registry().with(layer);

    let result = tracing::subscriber::with_default(subscriber, f);
    let records = records.lock().unwrap().clone();
    (result, records)
}

/// Only the `error`-level records.
pub fn errors(records: &[LogRecord]) -> Vec<&LogRecord> {
    records.iter().filter(|r| r.level == Level::ERROR).collect()
}
