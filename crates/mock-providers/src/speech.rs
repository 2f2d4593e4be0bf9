//! Silent speech - a valid WAV clip with no samples.

use adapt_core::{async_trait, ProviderError, SpeechAudio, SpeechSynthesizer};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const SAMPLE_RATE: u32 = 16_000;
const BITS_PER_SAMPLE: u16 = 16;
const CHANNELS: u16 = 1;

/// A speech synthesizer that returns an empty 16 kHz mono PCM WAV file.
#[derive(Debug, Clone, Default)]
pub struct SilentSpeech;

impl SilentSpeech {
    pub fn new() -> Self {
        Self
    }
}

/// RIFF header for a PCM stream with a zero-length data chunk.
fn silent_wav() -> Vec<u8> {
    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
    let byte_rate = SAMPLE_RATE * u32::from(block_align);

    let mut wav = Vec::with_capacity(44);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&36u32.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&CHANNELS.to_le_bytes());
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&0u32.to_le_bytes());
    wav
}

#[async_trait]
impl SpeechSynthesizer for SilentSpeech {
    async fn synthesize(&self, text: &str) -> Result<SpeechAudio, ProviderError> {
        if text.trim().is_empty() {
            return Err(ProviderError::InvalidInput("nothing to synthesize".to_string()));
        }
        Ok(SpeechAudio {
            audio_format: "wav".to_string(),
            audio_base64: STANDARD.encode(silent_wav()),
        })
    }

    fn name(&self) -> &str {
        "SilentSpeech"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_wav() {
        let audio = SilentSpeech::new().synthesize("Hello").await.unwrap();
        assert_eq!(audio.audio_format, "wav");

        let bytes = STANDARD.decode(&audio.audio_base64).unwrap();
        assert_eq!(bytes.len(), 44);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
    }

    #[tokio::test]
    async fn test_rejects_empty_text() {
        let err = SilentSpeech::new().synthesize("  ").await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidInput(_)));
    }
}
