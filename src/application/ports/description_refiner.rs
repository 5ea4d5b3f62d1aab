use async_trait::async_trait;

use super::CaptioningError;

/// Second pass over a caption with access to the image. May return the text
/// unchanged.
#[async_trait]
pub trait DescriptionRefiner: Send + Sync {
    async fn refine(&self, image: &[u8], description: &str) -> Result<String, CaptioningError>;
}
