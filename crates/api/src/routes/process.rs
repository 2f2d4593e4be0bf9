//! The adaptation endpoint.

use adapt_core::{AdaptRequest, AdaptResponse};
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Validate the body and run it through the pipeline.
///
/// The body is taken raw so that contract violations are reported with our
/// own 422 error shape rather than the extractor's.
pub async fn process(State(state): State<AppState>, body: Bytes) -> Result<Json<AdaptResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("adapt", %request_id);

    let request = AdaptRequest::from_slice(&body)?;
    let response = state.pipeline.handle(&request).instrument(span).await?;

    Ok(Json(response))
}
