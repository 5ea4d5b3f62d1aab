use async_trait::async_trait;
use bytes::{BufMut, Bytes, BytesMut};

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::Voice;

const SAMPLE_RATE: u32 = 16_000;
const BITS_PER_SAMPLE: u16 = 16;
const CHANNELS: u16 = 1;

/// Emits a short silent WAV clip, scaled to the text length. Used in
/// scaffold mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSynthesizer;

impl SilentSynthesizer {
    pub fn render(duration_ms: u32) -> Bytes {
        let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
        let byte_rate = SAMPLE_RATE * u32::from(block_align);
        let data_len = byte_rate / 1000 * duration_ms;

        let mut wav = BytesMut::with_capacity(44 + data_len as usize);
        wav.put_slice(b"RIFF");
        wav.put_u32_le(36 + data_len);
        wav.put_slice(b"WAVE");
        wav.put_slice(b"fmt ");
        wav.put_u32_le(16);
        wav.put_u16_le(1); // PCM
        wav.put_u16_le(CHANNELS);
        wav.put_u32_le(SAMPLE_RATE);
        wav.put_u32_le(byte_rate);
        wav.put_u16_le(block_align);
        wav.put_u16_le(BITS_PER_SAMPLE);
        wav.put_slice(b"data");
        wav.put_u32_le(data_len);
        wav.put_bytes(0, data_len as usize);
        wav.freeze()
    }
}

#[async_trait]
impl SpeechSynthesizer for SilentSynthesizer {
    async fn synthesize(&self, text: &str, _voice: Voice) -> Result<Bytes, SynthesisError> {
        let words = text.split_whitespace().count().clamp(1, 120) as u32;
        Ok(Self::render(words * 250))
    }
}
