//! Extractive summarizer - the leading words of the page.

use std::sync::atomic::{AtomicUsize, Ordering};

use adapt_core::{async_trait, ProviderError, SummaryLength, Summarizer};

/// A summarizer that keeps the first words of the page.
///
/// Word budgets follow the upper end of each length's target range.
#[derive(Debug, Default)]
pub struct ExtractiveSummarizer {
    calls: AtomicUsize,
}

impl ExtractiveSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of summaries produced so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn word_budget(length: SummaryLength) -> usize {
        match length {
            SummaryLength::Short => 120,
            SummaryLength::Medium => 250,
        }
    }
}

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    async fn summarize(&self, page_text: &str, length: SummaryLength) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let words: Vec<&str> = page_text
            .split_whitespace()
            .take(Self::word_budget(length))
            .collect();
        Ok(words.join(" "))
    }

    fn name(&self) -> &str {
        "ExtractiveSummarizer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_short_page_kept_whole() {
        let summarizer = ExtractiveSummarizer::new();
        let summary = summarizer
            .summarize("  The   quick brown\nfox. ", SummaryLength::Short)
            .await
            .unwrap();
        assert_eq!(summary, "The quick brown fox.");
        assert_eq!(summarizer.calls(), 1);
    }

    #[tokio::test]
    async fn test_word_budgets() {
        let summarizer = ExtractiveSummarizer::new();
        let page = "word ".repeat(400);

        let short = summarizer.summarize(&page, SummaryLength::Short).await.unwrap();
        let medium = summarizer.summarize(&page, SummaryLength::Medium).await.unwrap();
        assert_eq!(short.split_whitespace().count(), 120);
        assert_eq!(medium.split_whitespace().count(), 250);
    }

    #[tokio::test]
    async fn test_empty_page() {
        let summarizer = ExtractiveSummarizer::new();
        assert_eq!(summarizer.summarize("   ", SummaryLength::Short).await.unwrap(), "");
    }
}
