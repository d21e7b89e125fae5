//! Accessibility: text-to-speech synthesis.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::client::{BackendError, GeminiClient};
use crate::wire::{GenerateContentRequest, GenerationConfig};

pub const SPEECH_MODEL: &str = "gemini-2.5-flash-preview-tts";
pub const VOICE_NAME: &str = "Kore";

/// The TTS endpoint returns 16-bit little-endian mono PCM at this rate.
pub const SPEECH_SAMPLE_RATE_HZ: u32 = 24_000;

/// Synthesizes `text` and returns the raw PCM16LE payload.
pub fn synthesize_speech(client: &GeminiClient, text: &str) -> Result<Vec<u8>, BackendError> {
    let request =
        GenerateContentRequest::from_text(text).with_config(GenerationConfig::audio(VOICE_NAME));
    let response = client.generate(SPEECH_MODEL, &request)?;
    let inline = response.inline_data().ok_or(BackendError::EmptyResponse)?;
    Ok(BASE64.decode(inline.data.as_bytes())?)
}

/// PCM16LE to normalized f32 samples. A trailing odd byte is ignored.
pub fn pcm16_to_f32(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcm_conversion_covers_the_full_range() {
        let bytes = [
            0x00, 0x00, // 0
            0xff, 0x7f, // i16::MAX
            0x00, 0x80, // i16::MIN
        ];
        let samples = pcm16_to_f32(&bytes);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], 0.0);
        assert!((samples[1] - (i16::MAX as f32 / 32768.0)).abs() < f32::EPSILON);
        assert_eq!(samples[2], -1.0);
    }

    #[test]
    fn trailing_odd_byte_is_dropped() {
        assert_eq!(pcm16_to_f32(&[0, 0, 7]).len(), 1);
        assert!(pcm16_to_f32(&[9]).is_empty());
    }
}
