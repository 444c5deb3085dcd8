//! Port for structured generation-event logging.
//!
//! Defines the [`GenerationLogger`] trait for recording generation events
//! (attempts, failures, scores, accepted sections) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures a machine-readable
//! record of every attempt (JSONL).

use serde_json::Value;

/// A structured generation event for logging.
pub struct GenerationEvent {
    /// Event type identifier (e.g., "generation_attempt", "section_scored").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl GenerationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging generation events.
///
/// `log` is synchronous and infallible; write failures are ignored so that
/// logging never interrupts report generation.
pub trait GenerationLogger: Send + Sync {
    fn log(&self, event: GenerationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoGenerationLogger;

impl GenerationLogger for NoGenerationLogger {
    fn log(&self, _event: GenerationEvent) {}
}
