//! Error types for providers and request ingress.

use std::time::Duration;

use thiserror::Error;

/// Errors raised by an external provider (transcription, reasoning,
/// summarization, speech synthesis, image generation).
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider is misconfigured (missing key, bad URL, client build failure).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never reached the provider or the connection dropped.
    #[error("network error: {0}")]
    Network(String),

    /// The provider refused the call because of rate limiting.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// The provider answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The input handed to the provider was unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The provider succeeded but produced nothing usable.
    #[error("provider returned empty output")]
    EmptyOutput,

    /// The provider output could not be interpreted.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// The call did not finish in time.
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

impl ProviderError {
    /// Whether the failure is a transient transport problem worth retrying.
    ///
    /// Everything else is a permanent provider error for this request.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::RateLimited(_) | Self::Timeout(_) => true,
            Self::Api { status, .. } => *status >= 500,
            Self::Configuration(_)
            | Self::InvalidInput(_)
            | Self::EmptyOutput
            | Self::ProcessingFailed(_) => false,
        }
    }
}

/// A request body that does not match the request contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid request: {message}")]
pub struct ValidationError {
    /// Human-readable reason.
    pub message: String,
    /// 1-based line of the offending input, when known.
    pub line: Option<usize>,
    /// 1-based column of the offending input, when known.
    pub column: Option<usize>,
}

impl ValidationError {
    /// Create a validation error without a source position.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            column: None,
        }
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        let (line, column) = if err.line() == 0 {
            (None, None)
        } else {
            (Some(err.line()), Some(err.column()))
        };
        Self {
            message: err.to_string(),
            line,
            column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_are_retryable() {
        assert!(ProviderError::Network("reset".into()).is_retryable());
        assert!(ProviderError::RateLimited("slow down".into()).is_retryable());
        assert!(ProviderError::Timeout(Duration::from_secs(3)).is_retryable());
        assert!(ProviderError::Api {
            status: 503,
            message: "overloaded".into()
        }
        .is_retryable());
    }

    #[test]
    fn test_permanent_errors_are_not_retryable() {
        assert!(!ProviderError::Api {
            status: 400,
            message: "bad request".into()
        }
        .is_retryable());
        assert!(!ProviderError::Configuration("no key".into()).is_retryable());
        assert!(!ProviderError::InvalidInput("bad base64".into()).is_retryable());
        assert!(!ProviderError::EmptyOutput.is_retryable());
    }

    #[test]
    fn test_validation_error_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        let validation = ValidationError::from(err);
        assert_eq!(validation.line, Some(2));
        assert!(validation.column.is_some());
    }
}
