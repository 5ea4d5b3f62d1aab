use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::Voice;

/// Backend speaker id for each voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerProfiles {
    pub female: String,
    pub male: String,
}

impl SpeakerProfiles {
    pub fn speaker_for(&self, voice: Voice) -> &str {
        match voice {
            Voice::Female => &self.female,
            Voice::Male => &self.male,
        }
    }
}

impl Default for SpeakerProfiles {
    fn default() -> Self {
        // VCTK speakers of the default multi-speaker VITS model.
        Self {
            female: "p270".to_string(),
            male: "p317".to_string(),
        }
    }
}

/// Synthesizes speech through an OpenAI-compatible `/v1/audio/speech`
/// endpoint.
pub struct OpenAiSpeechSynthesizer {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    speakers: SpeakerProfiles,
}

impl OpenAiSpeechSynthesizer {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

    pub fn new(
        base_url: &str,
        model: &str,
        api_key: &str,
        speakers: SpeakerProfiles,
    ) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("client: {e}")))?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            speakers,
        })
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSpeechSynthesizer {
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<Bytes, SynthesisError> {
        let url = format!("{}/v1/audio/speech", self.base_url);
        let speaker = self.speakers.speaker_for(voice);

        let body = serde_json::json!({
            "model": self.model,
            "input": text,
            "voice": speaker,
            "response_format": "wav"
        });

        tracing::debug!(
            model = %self.model,
            speaker = %speaker,
            chars = text.len(),
            "Requesting speech synthesis"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SynthesisError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("body: {e}")))?;

        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        tracing::info!(bytes = audio.len(), speaker = %speaker, "Speech synthesis completed");

        Ok(audio)
    }
}
