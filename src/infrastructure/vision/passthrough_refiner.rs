use async_trait::async_trait;

use crate::application::ports::{CaptioningError, DescriptionRefiner};

/// Refinement slot that keeps the caption as is.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughRefiner;

#[async_trait]
impl DescriptionRefiner for PassthroughRefiner {
    async fn refine(&self, _image: &[u8], description: &str) -> Result<String, CaptioningError> {
        Ok(description.to_string())
    }
}
