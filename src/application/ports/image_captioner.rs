use async_trait::async_trait;

use crate::domain::CaptionProfile;

#[async_trait]
pub trait ImageCaptioner: Send + Sync {
    async fn caption(
        &self,
        image: &[u8],
        profile: CaptionProfile,
    ) -> Result<String, CaptioningError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CaptioningError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("empty description")]
    EmptyDescription,
}
