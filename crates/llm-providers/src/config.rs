//! Configuration for the HTTP providers.

use std::env;
use std::time::Duration;

use adapt_core::ProviderError;

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.openai.com";

/// Default chat model for reasoning and summaries.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default speech-to-text model.
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";

/// Default text-to-speech model.
pub const DEFAULT_SPEECH_MODEL: &str = "tts-1";

/// Default text-to-speech voice.
pub const DEFAULT_SPEECH_VOICE: &str = "alloy";

/// Default synthesized audio container.
pub const DEFAULT_SPEECH_FORMAT: &str = "wav";

/// Default HTTP request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration shared by every HTTP provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API base URL, without the `/v1` suffix.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Chat model for the reasoning engine.
    pub model: String,

    /// Chat model for summaries. Falls back to `model`.
    pub summary_model: Option<String>,

    /// Speech-to-text model.
    pub transcription_model: String,

    /// Text-to-speech model.
    pub speech_model: String,

    /// Text-to-speech voice.
    pub speech_voice: String,

    /// Synthesized audio container (`wav`, `mp3`, ...).
    pub speech_format: String,

    /// Image model. `None` selects the placeholder image generator.
    pub image_model: Option<String>,

    /// Temperature for chat generation (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Maximum tokens for chat responses.
    pub max_tokens: Option<u32>,

    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            summary_model: None,
            transcription_model: DEFAULT_TRANSCRIPTION_MODEL.to_string(),
            speech_model: DEFAULT_SPEECH_MODEL.to_string(),
            speech_voice: DEFAULT_SPEECH_VOICE.to_string(),
            speech_format: DEFAULT_SPEECH_FORMAT.to_string(),
            image_model: None,
            temperature: Some(0.2),
            max_tokens: Some(1024),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl LlmConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `LLM_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `LLM_API_URL` - API URL (default: https://api.openai.com)
    /// - `LLM_MODEL` - Reasoning chat model (default: gpt-4o-mini)
    /// - `LLM_SUMMARY_MODEL` - Summary chat model (default: `LLM_MODEL`)
    /// - `LLM_TRANSCRIPTION_MODEL` - Speech-to-text model (default: whisper-1)
    /// - `LLM_SPEECH_MODEL` - Text-to-speech model (default: tts-1)
    /// - `LLM_SPEECH_VOICE` - Text-to-speech voice (default: alloy)
    /// - `LLM_SPEECH_FORMAT` - Audio container (default: wav)
    /// - `LLM_IMAGE_MODEL` - Image model (default: unset, placeholder images)
    /// - `LLM_TEMPERATURE` - Temperature (default: 0.2)
    /// - `LLM_MAX_TOKENS` - Max tokens (default: 1024)
    /// - `LLM_TIMEOUT_SECS` - HTTP request timeout (default: 120)
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = env::var("LLM_API_KEY")
            .map_err(|_| ProviderError::Configuration("LLM_API_KEY not set".to_string()))?;

        let defaults = Self::default();

        let api_url = env::var("LLM_API_URL").unwrap_or(defaults.api_url);
        let model = env::var("LLM_MODEL").unwrap_or(defaults.model);
        let summary_model = env::var("LLM_SUMMARY_MODEL").ok().filter(|m| !m.is_empty());
        let transcription_model =
            env::var("LLM_TRANSCRIPTION_MODEL").unwrap_or(defaults.transcription_model);
        let speech_model = env::var("LLM_SPEECH_MODEL").unwrap_or(defaults.speech_model);
        let speech_voice = env::var("LLM_SPEECH_VOICE").unwrap_or(defaults.speech_voice);
        let speech_format = env::var("LLM_SPEECH_FORMAT").unwrap_or(defaults.speech_format);
        let image_model = env::var("LLM_IMAGE_MODEL").ok().filter(|m| !m.is_empty());

        let temperature = env::var("LLM_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(defaults.temperature);

        let max_tokens = env::var("LLM_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(defaults.max_tokens);

        let request_timeout = env::var("LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        Ok(Self {
            api_url,
            api_key,
            model,
            summary_model,
            transcription_model,
            speech_model,
            speech_voice,
            speech_format,
            image_model,
            temperature,
            max_tokens,
            request_timeout,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> LlmConfigBuilder {
        LlmConfigBuilder::default()
    }

    /// The model used for summaries.
    pub fn summary_model(&self) -> &str {
        self.summary_model.as_deref().unwrap_or(&self.model)
    }

    /// Build a full endpoint URL from a `/v1/...` path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), path)
    }
}

/// Builder for LlmConfig.
#[derive(Debug, Default)]
pub struct LlmConfigBuilder {
    config: LlmConfig,
}

impl LlmConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the reasoning model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the summary model.
    pub fn summary_model(mut self, model: impl Into<String>) -> Self {
        self.config.summary_model = Some(model.into());
        self
    }

    /// Set the transcription model.
    pub fn transcription_model(mut self, model: impl Into<String>) -> Self {
        self.config.transcription_model = model.into();
        self
    }

    /// Set the speech model.
    pub fn speech_model(mut self, model: impl Into<String>) -> Self {
        self.config.speech_model = model.into();
        self
    }

    /// Set the speech voice.
    pub fn speech_voice(mut self, voice: impl Into<String>) -> Self {
        self.config.speech_voice = voice.into();
        self
    }

    /// Set the speech audio format.
    pub fn speech_format(mut self, format: impl Into<String>) -> Self {
        self.config.speech_format = format.into();
        self
    }

    /// Set the image model, enabling real image generation.
    pub fn image_model(mut self, model: impl Into<String>) -> Self {
        self.config.image_model = Some(model.into());
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Set the HTTP request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> LlmConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LlmConfig::default();

        assert_eq!(config.api_url, "https://api.openai.com");
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.summary_model(), "gpt-4o-mini");
        assert_eq!(config.transcription_model, "whisper-1");
        assert_eq!(config.speech_format, "wav");
        assert!(config.image_model.is_none());
        assert_eq!(config.max_tokens, Some(1024));
    }

    #[test]
    fn test_builder_all_options() {
        let config = LlmConfig::builder()
            .api_key("my-key")
            .api_url("http://localhost:9000/")
            .model("reasoner")
            .summary_model("summarizer")
            .transcription_model("stt")
            .speech_model("tts")
            .speech_voice("nova")
            .speech_format("mp3")
            .image_model("painter")
            .temperature(0.5)
            .max_tokens(512)
            .request_timeout(Duration::from_secs(5))
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.model, "reasoner");
        assert_eq!(config.summary_model(), "summarizer");
        assert_eq!(config.transcription_model, "stt");
        assert_eq!(config.speech_model, "tts");
        assert_eq!(config.speech_voice, "nova");
        assert_eq!(config.speech_format, "mp3");
        assert_eq!(config.image_model.as_deref(), Some("painter"));
        assert_eq!(config.temperature, Some(0.5));
        assert_eq!(config.max_tokens, Some(512));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(
            config.endpoint("/v1/chat/completions"),
            "http://localhost:9000/v1/chat/completions"
        );
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_llm_vars() {
            for var in [
                "LLM_API_KEY",
                "LLM_API_URL",
                "LLM_MODEL",
                "LLM_SUMMARY_MODEL",
                "LLM_TRANSCRIPTION_MODEL",
                "LLM_SPEECH_MODEL",
                "LLM_SPEECH_VOICE",
                "LLM_SPEECH_FORMAT",
                "LLM_IMAGE_MODEL",
                "LLM_TEMPERATURE",
                "LLM_MAX_TOKENS",
                "LLM_TIMEOUT_SECS",
            ] {
                std::env::remove_var(var);
            }
        }

        // Scenario 1: Missing API key should error
        clear_all_llm_vars();
        match LlmConfig::from_env() {
            Err(ProviderError::Configuration(msg)) => assert!(msg.contains("LLM_API_KEY")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }

        // Scenario 2: Only API key set, defaults used
        clear_all_llm_vars();
        std::env::set_var("LLM_API_KEY", "test-env-key");

        let config = LlmConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-env-key");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.summary_model.is_none());
        assert!(config.image_model.is_none());
        assert_eq!(config.temperature, Some(0.2));
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);

        // Scenario 3: Overrides, with unparseable numbers falling back
        clear_all_llm_vars();
        std::env::set_var("LLM_API_KEY", "full-test-key");
        std::env::set_var("LLM_MODEL", "reasoner");
        std::env::set_var("LLM_SUMMARY_MODEL", "summarizer");
        std::env::set_var("LLM_IMAGE_MODEL", "painter");
        std::env::set_var("LLM_SPEECH_FORMAT", "mp3");
        std::env::set_var("LLM_MAX_TOKENS", "2048");
        std::env::set_var("LLM_TEMPERATURE", "warm");
        std::env::set_var("LLM_TIMEOUT_SECS", "30");

        let config = LlmConfig::from_env().unwrap();
        assert_eq!(config.model, "reasoner");
        assert_eq!(config.summary_model(), "summarizer");
        assert_eq!(config.image_model.as_deref(), Some("painter"));
        assert_eq!(config.speech_format, "mp3");
        assert_eq!(config.max_tokens, Some(2048));
        assert_eq!(config.temperature, Some(0.2));
        assert_eq!(config.request_timeout, Duration::from_secs(30));

        // Cleanup
        clear_all_llm_vars();
    }
}
