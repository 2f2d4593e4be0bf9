//! Text-to-speech over `/v1/audio/speech`.

use adapt_core::{async_trait, ProviderError, SpeechAudio, SpeechSynthesizer};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::api_types::SpeechRequest;
use crate::client::HttpClient;
use crate::config::LlmConfig;

/// Synthesizes speech with a hosted text-to-speech model.
pub struct HttpSpeech {
    http: HttpClient,
}

impl HttpSpeech {
    pub fn new(config: LlmConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }
}

#[async_trait]
impl SpeechSynthesizer for HttpSpeech {
    async fn synthesize(&self, text: &str) -> Result<SpeechAudio, ProviderError> {
        let config = self.http.config();
        let request = SpeechRequest {
            model: config.speech_model.clone(),
            input: text.to_string(),
            voice: config.speech_voice.clone(),
            response_format: config.speech_format.clone(),
        };

        let audio = self
            .http
            .send_bytes(self.http.post("/v1/audio/speech").json(&request))
            .await?;

        if audio.is_empty() {
            return Err(ProviderError::EmptyOutput);
        }

        debug!(audio_bytes = audio.len(), format = %config.speech_format, "Received synthesized speech");

        Ok(SpeechAudio {
            audio_format: config.speech_format.clone(),
            audio_base64: STANDARD.encode(audio),
        })
    }

    fn name(&self) -> &str {
        "HttpSpeech"
    }
}
