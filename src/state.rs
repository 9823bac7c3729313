//! Shared application state handed to every handler.

use crate::events::{EventSink, TracingSink};
use crate::store::ItemStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    pub events: Arc<dyn EventSink>,
}

impl AppState {
    /// State that reports events through `tracing`.
    pub fn new(store: impl ItemStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            events: Arc::new(TracingSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }
}
