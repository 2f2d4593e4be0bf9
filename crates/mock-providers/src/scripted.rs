//! Scripted reasoning engine - answers every prompt with the same text.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use adapt_core::{async_trait, ProviderError, ReasoningEngine};

/// A reasoning engine that returns fixed text and records what it was asked.
///
/// The text need not be valid JSON, which makes it useful for exercising the
/// fallback plan.
#[derive(Debug, Default)]
pub struct ScriptedReasoner {
    answer: String,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl ScriptedReasoner {
    /// Create an engine that always answers with `answer`.
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            ..Default::default()
        }
    }

    /// An engine whose answer is a neutral, valid plan with no adaptations.
    pub fn neutral() -> Self {
        Self::new(
            r#"{"mode": "suggest", "ui_actions": {}, "content_actions": {}, "reason": "no friction detected", "confidence": 0.5}"#,
        )
    }

    /// Number of prompts received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent prompt, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }
}

#[async_trait]
impl ReasoningEngine for ScriptedReasoner {
    async fn reason(&self, prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }
        Ok(self.answer.clone())
    }

    fn name(&self) -> &str {
        "ScriptedReasoner"
    }
}
