//! Port for structured analysis event logging.
//!
//! Defines the [`AnalysisEventLogger`] trait for recording analysis events
//! (classifications, stage changes, recommendations) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures an audit
//! trail of analyses in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured analysis event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. Adapters add the timestamp.
pub struct AnalysisEvent {
    /// Event type identifier (e.g., "submission_classified", "recommendation_issued").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AnalysisEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging analysis events to a structured log.
///
/// The `log` method is synchronous and non-fallible: logging failures
/// never interrupt an analysis.
pub trait AnalysisEventLogger: Send + Sync {
    /// Record an analysis event.
    fn log(&self, event: AnalysisEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoEventLogger;

impl AnalysisEventLogger for NoEventLogger {
    fn log(&self, _event: AnalysisEvent) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Keeps every event in memory.
    #[derive(Default)]
    pub struct RecordingEventLogger {
        events: Mutex<Vec<(String, Value)>>,
    }

    impl RecordingEventLogger {
        pub fn event_types(&self) -> Vec<String> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .map(|(t, _)| t.clone())
                .collect()
        }

        pub fn payloads(&self, event_type: &str) -> Vec<Value> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter(|(t, _)| t == event_type)
                .map(|(_, p)| p.clone())
                .collect()
        }
    }

    impl AnalysisEventLogger for RecordingEventLogger {
        fn log(&self, event: AnalysisEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type.to_string(), event.payload));
        }
    }
}
