//! Leveled event sink for audit-style messages (the delete path reports through it).

/// Receives leveled, human-readable events. Injected via [`crate::AppState`] so tests can
/// record what was emitted.
pub trait EventSink: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards events to `tracing`; timestamps and destination come from the subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: "item_service::events", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "item_service::events", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "item_service::events", "{}", message);
    }
}
