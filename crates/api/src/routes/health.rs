//! Health check endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Health {
    pub ok: bool,
}

/// Health check endpoint.
pub async fn health() -> Json<Health> {
    Json(Health { ok: true })
}
