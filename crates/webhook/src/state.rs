//! Application state shared across handlers.

use std::sync::Arc;

use pipeline::EventRouter;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Event router with all pipeline collaborators wired in.
    pub router: Arc<EventRouter>,
}

impl AppState {
    /// Create new application state.
    pub fn new(router: EventRouter) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}
