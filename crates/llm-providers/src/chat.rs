//! Chat-completions provider: the reasoning engine and the summarizer.

use adapt_core::{async_trait, char_prefix, ProviderError, ReasoningEngine, SummaryLength, Summarizer};
use tracing::{debug, info};

use crate::api_types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::client::HttpClient;
use crate::config::LlmConfig;

/// Page characters sent to the summarizer.
pub const SUMMARY_PAGE_CHARS: usize = 8000;

/// Build the summarization prompt for a page.
pub fn build_summary_prompt(page_text: &str, length: SummaryLength) -> String {
    format!(
        "You are an accessibility-focused summarization engine.\n\
         \n\
         TASK:\n\
         Summarize the following webpage content into a clear, neutral, easy-to-understand summary.\n\
         \n\
         REQUIREMENTS:\n\
         - Length: {}\n\
         - Use simple sentences\n\
         - No bullet points\n\
         - No headings\n\
         - No markdown\n\
         - No emojis\n\
         - No references to AI, models, or summarization\n\
         - Preserve factual meaning only\n\
         - Do not add new information\n\
         \n\
         WEBPAGE CONTENT:\n\
         {}\n\
         \n\
         Return ONLY the summary text.",
        length.target_words(),
        char_prefix(page_text, SUMMARY_PAGE_CHARS)
    )
}

/// A chat-completions client used as both reasoning engine and summarizer.
pub struct ChatEngine {
    http: HttpClient,
}

impl ChatEngine {
    /// Create a new ChatEngine with the given configuration.
    pub fn new(config: LlmConfig) -> Result<Self, ProviderError> {
        let http = HttpClient::new(config)?;

        info!(
            "ChatEngine initialized with model: {}, summary model: {}",
            http.config().model,
            http.config().summary_model()
        );

        Ok(Self { http })
    }

    /// Create a ChatEngine from environment variables.
    ///
    /// See [`LlmConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new(LlmConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &LlmConfig {
        self.http.config()
    }

    /// Send a single user message and return the first choice's content.
    async fn complete(&self, model: &str, prompt: &str) -> Result<Option<String>, ProviderError> {
        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: self.config().max_tokens,
            temperature: self.config().temperature,
        };

        debug!(model, prompt_len = prompt.len(), "Sending chat completion request");

        let completion: ChatCompletionResponse = self
            .http
            .send_json(self.http.post("/v1/chat/completions").json(&request))
            .await?;

        if let Some(usage) = &completion.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Chat completion usage"
            );
        }

        Ok(completion.first_content().map(str::to_string))
    }
}

#[async_trait]
impl ReasoningEngine for ChatEngine {
    /// Missing content is returned as empty text; the plan parser decides
    /// what to make of it.
    async fn reason(&self, prompt: &str) -> Result<String, ProviderError> {
        let model = self.config().model.clone();
        Ok(self.complete(&model, prompt).await?.unwrap_or_default())
    }

    fn name(&self) -> &str {
        "ChatEngine"
    }
}

#[async_trait]
impl Summarizer for ChatEngine {
    async fn summarize(&self, page_text: &str, length: SummaryLength) -> Result<String, ProviderError> {
        if page_text.trim().is_empty() {
            return Ok(String::new());
        }

        let prompt = build_summary_prompt(page_text, length);
        let model = self.config().summary_model().to_string();
        let summary = self.complete(&model, &prompt).await?.unwrap_or_default();

        Ok(summary.trim().to_string())
    }

    fn name(&self) -> &str {
        "ChatEngine"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_lengths() {
        let short = build_summary_prompt("Page body", SummaryLength::Short);
        assert!(short.contains("- Length: 80-120 words\n"));
        assert!(short.contains("WEBPAGE CONTENT:\nPage body\n"));
        assert!(short.ends_with("Return ONLY the summary text."));

        let medium = build_summary_prompt("Page body", SummaryLength::Medium);
        assert!(medium.contains("- Length: 150-250 words\n"));
    }

    #[test]
    fn test_summary_prompt_bounds_page() {
        let page = "é".repeat(SUMMARY_PAGE_CHARS + 100);
        let prompt = build_summary_prompt(&page, SummaryLength::Short);
        assert!(prompt.contains(&"é".repeat(SUMMARY_PAGE_CHARS)));
        assert!(!prompt.contains(&"é".repeat(SUMMARY_PAGE_CHARS + 1)));
    }

    #[tokio::test]
    async fn test_empty_page_skips_network() {
        // The URL is unroutable; any request would fail.
        let config = LlmConfig::builder()
            .api_key("key")
            .api_url("http://127.0.0.1:1")
            .build();
        let engine = ChatEngine::new(config).unwrap();

        let summary = engine.summarize("  \n ", SummaryLength::Short).await.unwrap();
        assert_eq!(summary, "");
    }
}
