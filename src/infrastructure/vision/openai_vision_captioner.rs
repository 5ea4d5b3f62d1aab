use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{CaptioningError, ImageCaptioner};
use crate::domain::{CaptionProfile, sniff_image_mime};

/// Captions images through an OpenAI-compatible chat completions endpoint
/// serving a vision model.
pub struct OpenAiVisionCaptioner {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiVisionCaptioner {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

    pub fn new(base_url: &str, model: &str, api_key: &str) -> Result<Self, CaptioningError> {
        let client = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CaptioningError::ApiRequestFailed(format!("client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

fn caption_prompt(profile: CaptionProfile) -> String {
    if profile.is_detailed() {
        format!(
            "Describe this image for someone who cannot see it. Cover the main subjects, \
             the setting, colors and any visible text. Use between {} and {} words and \
             do not repeat yourself.",
            profile.min_length, profile.max_length
        )
    } else {
        format!(
            "Describe this image in one short, plain sentence of at most {} words.",
            profile.max_length
        )
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl ImageCaptioner for OpenAiVisionCaptioner {
    #[tracing::instrument(skip(self, image), fields(model = %self.model, bytes = image.len()))]
    async fn caption(
        &self,
        image: &[u8],
        profile: CaptionProfile,
    ) -> Result<String, CaptioningError> {
        let b64 = general_purpose::STANDARD.encode(image);
        let data_uri = format!("data:{};base64,{b64}", sniff_image_mime(image));

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "image_url",
                            "image_url": { "url": data_uri }
                        },
                        {
                            "type": "text",
                            "text": caption_prompt(profile)
                        }
                    ]
                }
            ],
            "max_tokens": profile.max_length * 2,
            "temperature": 0.0,
            "stream": false
        });

        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CaptioningError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(CaptioningError::ApiRequestFailed(format!(
                "status {status}: {text}"
            )));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| CaptioningError::InvalidResponse(e.to_string()))?;

        let caption = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .unwrap_or_default();

        if caption.is_empty() {
            return Err(CaptioningError::EmptyDescription);
        }

        tracing::debug!(chars = caption.len(), "Caption received");

        Ok(caption)
    }
}
