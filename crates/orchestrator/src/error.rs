//! Error types for pipeline operations.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use adapt_core::ProviderError;
use thiserror::Error;
use tokio::time::timeout;

/// The pipeline step that called out to a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Transcription,
    Reasoning,
    Summary,
    Audio,
    Flashcards,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transcription => "transcription",
            Self::Reasoning => "reasoning",
            Self::Summary => "summary",
            Self::Audio => "audio",
            Self::Flashcards => "flashcards",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that abort a request. Malformed engine output is never one of
/// these; it is recovered by the fallback plan.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A provider call failed.
    #[error("{stage} provider failed: {source}")]
    Provider {
        stage: Stage,
        #[source]
        source: ProviderError,
    },

    /// A provider call did not finish in time.
    #[error("{stage} timed out after {after:?}")]
    Timeout { stage: Stage, after: Duration },
}

impl PipelineError {
    /// Wrap a provider failure with the stage it happened in.
    pub fn provider(stage: Stage, source: ProviderError) -> Self {
        Self::Provider { stage, source }
    }

    /// The stage that failed.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Provider { stage, .. } | Self::Timeout { stage, .. } => *stage,
        }
    }

    /// Whether the caller may retry the request as-is.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Provider { source, .. } => source.is_retryable(),
            Self::Timeout { .. } => true,
        }
    }

    /// Whether this is the distinguished timeout kind.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. }
                | Self::Provider {
                    source: ProviderError::Timeout(_),
                    ..
                }
        )
    }
}

/// Await a provider call, bounded by `limit`, attributing failures to `stage`.
pub(crate) async fn bounded<T, F>(stage: Stage, limit: Duration, call: F) -> Result<T, PipelineError>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    match timeout(limit, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(source)) => Err(PipelineError::provider(stage, source)),
        Err(_) => Err(PipelineError::Timeout { stage, after: limit }),
    }
}
