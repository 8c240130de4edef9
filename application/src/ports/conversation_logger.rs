//! Port for structured transcript logging.
//!
//! Defines the [`ConversationLogger`] trait for recording debate events
//! (session start, persona exchanges, summary, result) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! debate transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured debate event for logging.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "session_start", "exchange", "summary").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging debate events to a structured log.
///
/// The `log` method is synchronous and non-fallible: logging failures must
/// not abort a debate.
pub trait ConversationLogger: Send + Sync {
    /// Record a debate event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when transcript logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
