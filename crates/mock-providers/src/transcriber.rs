//! Fixed transcriber - returns the same transcript for any audio.

use adapt_core::{async_trait, decode_audio_payload, ProviderError, Transcriber};

/// A transcriber that validates the payload and returns a fixed transcript.
///
/// Empty audio yields an empty transcript, and malformed base64 is rejected
/// the same way a real transcriber would reject it.
#[derive(Debug, Clone, Default)]
pub struct FixedTranscriber {
    transcript: String,
}

impl FixedTranscriber {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

#[async_trait]
impl Transcriber for FixedTranscriber {
    async fn transcribe(&self, audio_base64: &str) -> Result<String, ProviderError> {
        let bytes = decode_audio_payload(audio_base64)?;
        if bytes.is_empty() {
            return Ok(String::new());
        }
        Ok(self.transcript.clone())
    }

    fn name(&self) -> &str {
        "FixedTranscriber"
    }
}
