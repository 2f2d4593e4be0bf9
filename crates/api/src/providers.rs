//! Construction of the provider set for each [`ProviderMode`].

use std::sync::Arc;

use adapt_core::ProviderError;
use llm_providers::{image_generator, ChatEngine, HttpSpeech, HttpTranscriber, LlmConfig};
use mock_providers::{ExtractiveSummarizer, FixedTranscriber, ScriptedReasoner, SilentSpeech, StaticImage};
use orchestrator::Providers;
use tracing::info;

use crate::config::ProviderMode;

/// What the offline transcriber hears.
const MOCK_TRANSCRIPT: &str = "please make this page easier to read";

impl ProviderMode {
    /// Build the providers for this mode. Remote mode reads [`LlmConfig::from_env`].
    pub fn build(self) -> Result<Providers, ProviderError> {
        match self {
            Self::Remote => remote_providers(LlmConfig::from_env()?),
            Self::Mock => Ok(mock_providers()),
        }
    }
}

/// Hosted providers. One chat client serves both reasoning and summaries.
pub fn remote_providers(config: LlmConfig) -> Result<Providers, ProviderError> {
    info!(api_url = %config.api_url, "Using remote providers");

    let chat = Arc::new(ChatEngine::new(config.clone())?);

    Ok(Providers::new(
        Arc::new(HttpTranscriber::new(config.clone())?),
        chat.clone(),
        chat,
        Arc::new(HttpSpeech::new(config.clone())?),
        image_generator(&config)?,
    ))
}

/// Offline providers with deterministic output.
pub fn mock_providers() -> Providers {
    info!("Using mock providers; no network calls will be made");

    Providers::new(
        Arc::new(FixedTranscriber::new(MOCK_TRANSCRIPT)),
        Arc::new(ScriptedReasoner::neutral()),
        Arc::new(ExtractiveSummarizer::new()),
        Arc::new(SilentSpeech::new()),
        Arc::new(StaticImage::default()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_providers() {
        let providers = mock_providers();
        assert_eq!(providers.reasoner.name(), "ScriptedReasoner");
        assert_eq!(providers.summarizer.name(), "ExtractiveSummarizer");
    }

    #[test]
    fn test_remote_providers_share_chat_engine() {
        let config = LlmConfig::builder().api_key("key").build();
        let providers = remote_providers(config).unwrap();
        assert_eq!(providers.reasoner.name(), "ChatEngine");
        assert_eq!(providers.summarizer.name(), "ChatEngine");
        assert_eq!(providers.images.name(), "PlaceholderImageGenerator");
    }

    #[test]
    fn test_remote_requires_key() {
        let err = remote_providers(LlmConfig::default()).unwrap_err();
        assert!(matches!(err, ProviderError::Configuration(_)));
    }
}
