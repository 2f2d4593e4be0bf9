//! Decoding of the base64 audio payload clients send.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ProviderError;

/// Decode a client audio payload into raw bytes.
///
/// Browsers send either bare base64 or a data URL
/// (`data:audio/wav;base64,....`) and frequently drop the trailing `=`
/// padding. The data-URL prefix is stripped and padding repaired before
/// decoding. An empty payload decodes to no bytes.
pub fn decode_audio_payload(payload: &str) -> Result<Vec<u8>, ProviderError> {
    let mut encoded = match payload.split_once(',') {
        Some((_, data)) => data,
        None => payload,
    }
    .trim()
    .to_string();

    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let missing = encoded.len() % 4;
    if missing != 0 {
        encoded.push_str(&"=".repeat(4 - missing));
    }

    STANDARD
        .decode(encoded.as_bytes())
        .map_err(|e| ProviderError::InvalidInput(format!("audio is not valid base64: {}", e)))
}
