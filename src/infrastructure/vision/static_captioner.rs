use async_trait::async_trait;

use crate::application::ports::{CaptioningError, ImageCaptioner};
use crate::domain::CaptionProfile;

/// Canned captions for scaffold mode.
pub struct StaticCaptioner {
    detailed: String,
    brief: String,
}

impl StaticCaptioner {
    pub fn new(detailed: impl Into<String>, brief: impl Into<String>) -> Self {
        Self {
            detailed: detailed.into(),
            brief: brief.into(),
        }
    }
}

impl Default for StaticCaptioner {
    fn default() -> Self {
        Self::new(
            "A placeholder description of the uploaded image, produced while the \
             service runs without a captioning backend.",
            "A placeholder description.",
        )
    }
}

#[async_trait]
impl ImageCaptioner for StaticCaptioner {
    async fn caption(
        &self,
        _image: &[u8],
        profile: CaptionProfile,
    ) -> Result<String, CaptioningError> {
        if profile.is_detailed() {
            Ok(self.detailed.clone())
        } else {
            Ok(self.brief.clone())
        }
    }
}
