use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::Voice;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Returns WAV-encoded audio for `text` spoken with `voice`.
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<Bytes, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("empty audio returned")]
    EmptyAudio,
}
