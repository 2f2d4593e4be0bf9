//! Route handlers.

pub mod adapt;
pub mod health;
pub mod process;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Adaptation pipeline
        .route("/process", post(process::process))
        // Static demo plans for the browser extension
        .route("/adapt", post(adapt::adapt))
}
