//! Configuration for the adaptation pipeline.

use std::env;
use std::time::Duration;

/// Default number of page characters placed in the reasoning prompt.
pub const DEFAULT_PAGE_PROMPT_CHARS: usize = 2000;

/// Default timeout for the transcription call.
pub const DEFAULT_TRANSCRIPTION_TIMEOUT: Duration = Duration::from_secs(60);

/// Default timeout for the reasoning call.
pub const DEFAULT_REASONING_TIMEOUT: Duration = Duration::from_secs(60);

/// Default timeout for each content branch (summary, audio, flashcards).
pub const DEFAULT_CONTENT_TIMEOUT: Duration = Duration::from_secs(90);

/// Configuration for [`Pipeline`](crate::Pipeline).
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Page characters placed in the reasoning prompt.
    pub page_prompt_chars: usize,

    /// Timeout for transcribing spoken input.
    pub transcription_timeout: Duration,

    /// Timeout for the reasoning engine call.
    pub reasoning_timeout: Duration,

    /// Timeout for each content branch, covering its summary and generation calls.
    pub content_timeout: Duration,

    /// When true, a failing content branch is reported as disabled instead of
    /// failing the whole request.
    pub isolate_content_failures: bool,

    /// Reasoning instructions. `None` uses [`load_reasoning_prompt`](crate::load_reasoning_prompt).
    pub reasoning_prompt: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            page_prompt_chars: DEFAULT_PAGE_PROMPT_CHARS,
            transcription_timeout: DEFAULT_TRANSCRIPTION_TIMEOUT,
            reasoning_timeout: DEFAULT_REASONING_TIMEOUT,
            content_timeout: DEFAULT_CONTENT_TIMEOUT,
            isolate_content_failures: true,
            reasoning_prompt: None,
        }
    }
}

impl PipelineConfig {
    /// Create configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `ADAPT_PAGE_PROMPT_CHARS` | Page prefix in the reasoning prompt | `2000` |
    /// | `ADAPT_TRANSCRIPTION_TIMEOUT_SECS` | Transcription timeout | `60` |
    /// | `ADAPT_REASONING_TIMEOUT_SECS` | Reasoning timeout | `60` |
    /// | `ADAPT_CONTENT_TIMEOUT_SECS` | Per content branch timeout | `90` |
    /// | `ADAPT_ISOLATE_CONTENT_FAILURES` | Degrade failing branches | `true` |
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let page_prompt_chars = env::var("ADAPT_PAGE_PROMPT_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PAGE_PROMPT_CHARS);

        let isolate_content_failures = env::var("ADAPT_ISOLATE_CONTENT_FAILURES")
            .ok()
            .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true);

        Self {
            page_prompt_chars,
            transcription_timeout: secs_from_env(
                "ADAPT_TRANSCRIPTION_TIMEOUT_SECS",
                DEFAULT_TRANSCRIPTION_TIMEOUT,
            ),
            reasoning_timeout: secs_from_env("ADAPT_REASONING_TIMEOUT_SECS", DEFAULT_REASONING_TIMEOUT),
            content_timeout: secs_from_env("ADAPT_CONTENT_TIMEOUT_SECS", DEFAULT_CONTENT_TIMEOUT),
            isolate_content_failures,
            reasoning_prompt: None,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

fn secs_from_env(key: &str, default: Duration) -> Duration {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(default)
}

/// Builder for PipelineConfig.
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Set the page prefix length used in the reasoning prompt.
    pub fn page_prompt_chars(mut self, chars: usize) -> Self {
        self.config.page_prompt_chars = chars;
        self
    }

    /// Set the transcription timeout.
    pub fn transcription_timeout(mut self, timeout: Duration) -> Self {
        self.config.transcription_timeout = timeout;
        self
    }

    /// Set the reasoning timeout.
    pub fn reasoning_timeout(mut self, timeout: Duration) -> Self {
        self.config.reasoning_timeout = timeout;
        self
    }

    /// Set the per-branch content timeout.
    pub fn content_timeout(mut self, timeout: Duration) -> Self {
        self.config.content_timeout = timeout;
        self
    }

    /// Choose whether content branch failures are isolated.
    pub fn isolate_content_failures(mut self, isolate: bool) -> Self {
        self.config.isolate_content_failures = isolate;
        self
    }

    /// Use the given reasoning instructions instead of loading them.
    pub fn reasoning_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.reasoning_prompt = Some(prompt.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> PipelineConfig {
        self.config
    }
}
