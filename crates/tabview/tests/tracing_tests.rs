#![forbid(unsafe_code)]

//! Tracing integration tests.
//!
//! Spans and events enabled:
//!   cargo test -p tabview --features tracing --test tracing_tests
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p tabview --test tracing_tests -- zero_overhead

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tabview::{Column, Table};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured span or event with its fields.
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct Captured {
    name: String,
    fields: HashMap<String, String>,
}

/// A tracing Layer that records new spans and events.
struct Capture {
    spans: Arc<Mutex<Vec<Captured>>>,
    events: Arc<Mutex<Vec<Captured>>>,
}

/// Handle to read captured data after the closure ran.
struct CaptureHandle {
    spans: Arc<Mutex<Vec<Captured>>>,
    events: Arc<Mutex<Vec<Captured>>>,
}

impl CaptureHandle {
    fn spans(&self) -> Vec<Captured> {
        self.spans.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<Captured> {
        self.events.lock().unwrap().clone()
    }
}

/// Visitor that extracts fields as strings.
struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(Captured {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Captured {
            name: event.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

fn with_captured<F>(f: F) -> CaptureHandle
where
    F: FnOnce(),
{
    let spans = Arc::new(Mutex::new(Vec::new()));
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = Capture {
        spans: spans.clone(),
        events: events.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    CaptureHandle { spans, events }
}

fn sample_table() -> Table {
    let mut table = Table::new()
        .columns(vec![Column::new("Name", 8), Column::new("Value", 8)])
        .height(4)
        .width(2);
    let data: String = (0..20).map(|i| format!("row{i},{}\n", i * 2)).collect();
    table.from_values(data.trim_end(), ",");
    table
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn render_emits_widget_span() {
    let table = sample_table();
    let handle = with_captured(|| {
        let _ = table.view();
    });

    let spans = handle.spans();
    let render: Vec<_> = spans.iter().filter(|s| s.name == "widget_render").collect();
    assert_eq!(render.len(), 1, "spans: {spans:?}");
    assert_eq!(render[0].fields.get("widget").map(String::as_str), Some("Table"));
    assert_eq!(render[0].fields.get("rows").map(String::as_str), Some("4"));
    assert_eq!(render[0].fields.get("cols").map(String::as_str), Some("2"));
}

#[test]
#[cfg(feature = "tracing")]
fn movement_emits_trace_events() {
    let mut table = sample_table();
    let handle = with_captured(|| {
        table.move_down(6);
    });

    let events = handle.events();
    let moved = events
        .iter()
        .find(|e| e.fields.get("message").is_some_and(|m| m.contains("move_down")))
        .unwrap_or_else(|| panic!("no move_down event in {events:?}"));
    assert_eq!(moved.fields.get("row").map(String::as_str), Some("6"));
    assert_eq!(moved.fields.get("y_offset").map(String::as_str), Some("3"));
}

#[test]
#[cfg(feature = "tracing")]
fn ragged_input_logs_normalization() {
    let handle = with_captured(|| {
        let mut table = Table::new();
        table.from_values("a,b,c\nd", ",");
    });

    let events = handle.events();
    assert!(
        events
            .iter()
            .any(|e| e.fields.get("padded").map(String::as_str) == Some("1")),
        "events: {events:?}"
    );
}

/// Without the feature nothing reaches the subscriber.
#[test]
#[cfg(not(feature = "tracing"))]
fn zero_overhead_without_feature() {
    let mut table = sample_table();
    let handle = with_captured(|| {
        table.move_down(6);
        let _ = table.view();
    });
    assert!(handle.spans().is_empty());
    assert!(handle.events().is_empty());
}
