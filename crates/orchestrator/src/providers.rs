//! The process-wide provider handles.

use std::fmt;
use std::sync::Arc;

use adapt_core::{ImageGenerator, ReasoningEngine, SpeechSynthesizer, Summarizer, Transcriber};

/// One handle per external collaborator.
///
/// Built once at start-up and shared read-only by every request. Cloning is
/// cheap: it clones the `Arc`s, not the providers.
#[derive(Clone)]
pub struct Providers {
    pub transcriber: Arc<dyn Transcriber>,
    pub reasoner: Arc<dyn ReasoningEngine>,
    pub summarizer: Arc<dyn Summarizer>,
    pub speech: Arc<dyn SpeechSynthesizer>,
    pub images: Arc<dyn ImageGenerator>,
}

impl Providers {
    pub fn new(
        transcriber: Arc<dyn Transcriber>,
        reasoner: Arc<dyn ReasoningEngine>,
        summarizer: Arc<dyn Summarizer>,
        speech: Arc<dyn SpeechSynthesizer>,
        images: Arc<dyn ImageGenerator>,
    ) -> Self {
        Self {
            transcriber,
            reasoner,
            summarizer,
            speech,
            images,
        }
    }

    /// Replace the reasoning engine, keeping the other handles.
    pub fn with_reasoner(mut self, reasoner: Arc<dyn ReasoningEngine>) -> Self {
        self.reasoner = reasoner;
        self
    }

    /// Replace the summarizer, keeping the other handles.
    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarizer>) -> Self {
        self.summarizer = summarizer;
        self
    }

    /// Replace the speech synthesizer, keeping the other handles.
    pub fn with_speech(mut self, speech: Arc<dyn SpeechSynthesizer>) -> Self {
        self.speech = speech;
        self
    }

    /// Replace the image generator, keeping the other handles.
    pub fn with_images(mut self, images: Arc<dyn ImageGenerator>) -> Self {
        self.images = images;
        self
    }

    /// Replace the transcriber, keeping the other handles.
    pub fn with_transcriber(mut self, transcriber: Arc<dyn Transcriber>) -> Self {
        self.transcriber = transcriber;
        self
    }
}

impl fmt::Debug for Providers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Providers")
            .field("transcriber", &self.transcriber.name())
            .field("reasoner", &self.reasoner.name())
            .field("summarizer", &self.summarizer.name())
            .field("speech", &self.speech.name())
            .field("images", &self.images.name())
            .finish()
    }
}
