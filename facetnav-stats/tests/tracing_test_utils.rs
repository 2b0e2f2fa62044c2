//! Test utilities for verifying tracing span emission.
//!
//! `SpanCaptureLayer` records span names and fields, including values
//! recorded after creation, so tests can assert on what the navigation
//! operations report.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::span::{Attributes, Id, Record};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// A recorded span with its name, level, and fields.
#[derive(Debug, Clone)]
pub struct CapturedSpan {
    pub name: &'static str,
    pub level: tracing::Level,
    pub fields: HashMap<String, String>,
}

/// Shared storage for captured spans, keyed by span id in creation order.
#[derive(Debug, Clone, Default)]
pub struct SpanStore(Arc<Mutex<Vec<(u64, CapturedSpan)>>>);

impl SpanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all captured spans.
    pub fn spans(&self) -> Vec<CapturedSpan> {
        self.0.lock().unwrap().iter().map(|(_, s)| s.clone()).collect()
    }

    /// Returns true if a span with the given name was captured.
    pub fn has_span(&self, name: &str) -> bool {
        self.0.lock().unwrap().iter().any(|(_, s)| s.name == name)
    }

    /// Returns the first span with the given name, if any.
    pub fn find_span(&self, name: &str) -> Option<CapturedSpan> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .find(|(_, s)| s.name == name)
            .map(|(_, s)| s.clone())
    }

    fn record(&self, id: &Id, fields: HashMap<String, String>) {
        let mut spans = self.0.lock().unwrap();
        if let Some((_, span)) = spans.iter_mut().rev().find(|(sid, _)| *sid == id.into_u64()) {
            span.fields.extend(fields);
        }
    }
}

/// A tracing `Layer` that captures span creation and later field records.
pub struct SpanCaptureLayer {
    store: SpanStore,
}

impl SpanCaptureLayer {
    pub fn new(store: SpanStore) -> Self {
        Self { store }
    }
}

/// Visitor that records span fields as string key-value pairs.
struct FieldVisitor(HashMap<String, String>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

impl<S> Layer<S> for SpanCaptureLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, _ctx: Context<'_, S>) {
        let mut fields = FieldVisitor(HashMap::new());
        attrs.record(&mut fields);

        let meta = attrs.metadata();
        let captured = CapturedSpan {
            name: meta.name(),
            level: *meta.level(),
            fields: fields.0,
        };

        self.store.0.lock().unwrap().push((id.into_u64(), captured));
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldVisitor(HashMap::new());
        values.record(&mut fields);
        self.store.record(id, fields.0);
    }
}

/// Initialize a tracing subscriber for tests that captures spans into the
/// returned `SpanStore`.
///
/// Returns the store and a guard that must be held for the duration of the
/// test (dropping it unsets the subscriber).
pub fn init_test_tracing() -> (SpanStore, tracing::subscriber::DefaultGuard) {
    let store = SpanStore::new();
    let layer = SpanCaptureLayer::new(store.clone());

    use tracing_subscriber::layer::SubscriberExt;
    let subscriber = tracing_subscriber::registry().with(layer);
    let guard = tracing::subscriber::set_default(subscriber);

    (store, guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_capture_basic() {
        let (store, _guard) = init_test_tracing();

        let span = tracing::debug_span!("test_span", field1 = 42u64, field2 = "hello");
        let _enter = span.enter();

        let spans = store.spans();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].name, "test_span");
        assert_eq!(spans[0].level, tracing::Level::DEBUG);
        assert_eq!(spans[0].fields.get("field1").unwrap(), "42");
        assert_eq!(spans[0].fields.get("field2").unwrap(), "hello");
    }

    #[test]
    fn test_late_recorded_fields() {
        let (store, _guard) = init_test_tracing();

        let span = tracing::debug_span!("late", rows = tracing::field::Empty);
        span.record("rows", 7u64);

        let captured = store.find_span("late").unwrap();
        assert_eq!(captured.fields.get("rows").unwrap(), "7");
    }
}
