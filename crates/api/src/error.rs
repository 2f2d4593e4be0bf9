//! Error types for the HTTP surface.

use adapt_core::ValidationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use orchestrator::PipelineError;
use thiserror::Error;
use tracing::{error, warn};

/// Errors returned by request handlers. No partial content is ever sent.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body does not match the request contract.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A provider failed or timed out.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl ApiError {
    /// HTTP status and machine-readable error type.
    pub fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            Self::Pipeline(err) if err.is_timeout() => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
            Self::Pipeline(err) if err.is_retryable() => {
                (StatusCode::SERVICE_UNAVAILABLE, "provider_unavailable")
            }
            Self::Pipeline(_) => (StatusCode::BAD_GATEWAY, "provider_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.classify();

        match &self {
            Self::Validation(err) => {
                warn!(line = err.line, column = err.column, "Rejected request: {}", err.message);
            }
            Self::Pipeline(err) => {
                error!(stage = %err.stage(), error_type, "Pipeline failed: {}", err);
            }
        }

        let body = serde_json::json!({
            "error": {
                "type": error_type,
                "message": self.to_string()
            }
        });

        (status, Json(body)).into_response()
    }
}
