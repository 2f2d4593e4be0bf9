//! Shared HTTP plumbing: authentication, status mapping, error decoding.

use adapt_core::ProviderError;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::api_types::ApiError;
use crate::config::LlmConfig;

/// An authenticated HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: LlmConfig,
}

impl HttpClient {
    /// Create a client with the configured request timeout.
    pub fn new(config: LlmConfig) -> Result<Self, ProviderError> {
        if config.api_key.is_empty() {
            return Err(ProviderError::Configuration("API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                ProviderError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Start an authenticated POST to a `/v1/...` path.
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.client
            .post(self.config.endpoint(path))
            .bearer_auth(&self.config.api_key)
    }

    /// Send a request and return the response if the status is a success.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, ProviderError> {
        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = status_error(status, &body);
        warn!(status = status.as_u16(), error = %err, "Provider returned an error status");
        Err(err)
    }

    /// Send a request and decode a JSON success body.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ProviderError> {
        self.send(request)
            .await?
            .json()
            .await
            .map_err(|e| ProviderError::ProcessingFailed(format!("Failed to parse response: {}", e)))
    }

    /// Send a request and return the raw success body.
    pub async fn send_bytes(&self, request: RequestBuilder) -> Result<Vec<u8>, ProviderError> {
        let bytes = self
            .send(request)
            .await?
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        Ok(bytes.to_vec())
    }

    fn transport_error(&self, e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::Timeout(self.config.request_timeout)
        } else {
            ProviderError::Network(format!("Failed to send request: {}", e))
        }
    }
}

/// Map a non-success status and body to a provider error.
pub fn status_error(status: StatusCode, body: &str) -> ProviderError {
    let message = serde_json::from_str::<ApiError>(body)
        .map(|api_error| api_error.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    if status == StatusCode::TOO_MANY_REQUESTS {
        return ProviderError::RateLimited(message);
    }

    ProviderError::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_parses_api_message() {
        let err = status_error(
            StatusCode::UNAUTHORIZED,
            r#"{"error": {"message": "Invalid API key", "type": "auth"}}"#,
        );
        match err {
            ProviderError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_status_error_plain_body() {
        let err = status_error(StatusCode::BAD_GATEWAY, " upstream down \n");
        assert!(matches!(err, ProviderError::Api { status: 502, ref message } if message == "upstream down"));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_rate_limit() {
        let err = status_error(StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert!(matches!(err, ProviderError::RateLimited(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = HttpClient::new(LlmConfig::default()).unwrap_err();
        assert!(matches!(err, ProviderError::Configuration(_)));
    }
}
