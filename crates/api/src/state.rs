//! Application state shared across handlers.

use std::sync::Arc;

use orchestrator::Pipeline;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The adaptation pipeline, shared read-only by every request.
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    /// Create new application state.
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}
