//! Speech-to-text over `/v1/audio/transcriptions`.

use adapt_core::{async_trait, decode_audio_payload, ProviderError, Transcriber};
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::api_types::TranscriptionResponse;
use crate::client::HttpClient;
use crate::config::LlmConfig;

/// Transcribes client audio with a hosted speech-to-text model.
pub struct HttpTranscriber {
    http: HttpClient,
}

impl HttpTranscriber {
    pub fn new(config: LlmConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, audio_base64: &str) -> Result<String, ProviderError> {
        let audio = decode_audio_payload(audio_base64)?;
        if audio.is_empty() {
            return Ok(String::new());
        }

        debug!(audio_bytes = audio.len(), "Sending audio for transcription");

        let file = Part::bytes(audio)
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| ProviderError::InvalidInput(format!("Invalid audio part: {}", e)))?;

        let form = Form::new()
            .text("model", self.http.config().transcription_model.clone())
            .text("response_format", "json")
            .part("file", file);

        let response: TranscriptionResponse = self
            .http
            .send_json(self.http.post("/v1/audio/transcriptions").multipart(form))
            .await?;

        Ok(response.text.trim().to_string())
    }

    fn name(&self) -> &str {
        "HttpTranscriber"
    }
}
