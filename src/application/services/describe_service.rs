use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use crate::application::ports::{DescriptionRefiner, ImageCaptioner};
use crate::domain::{
    AudioKey, CaptionProfile, DescriptionVariant, ImageIdentity, Voice, identity_of,
};

use super::artifact_error::bounded;
use super::{ArtifactError, AudioArtifactResolver, DescriptionCache, ResolvedAudio};

#[derive(Debug, Clone)]
pub struct DescribeOutcome {
    pub identity: ImageIdentity,
    pub description: String,
    pub audio: ResolvedAudio,
}

impl DescribeOutcome {
    pub fn audio_url(&self) -> String {
        self.audio.key.url_path()
    }
}

/// Image in, description and narration out, each generated at most once
/// per key.
pub struct DescribeService {
    descriptions: Arc<DescriptionCache>,
    audio: Arc<AudioArtifactResolver>,
    captioner: Arc<dyn ImageCaptioner>,
    refiner: Arc<dyn DescriptionRefiner>,
    collaborator_timeout: Duration,
}

impl DescribeService {
    pub fn new(
        descriptions: Arc<DescriptionCache>,
        audio: Arc<AudioArtifactResolver>,
        captioner: Arc<dyn ImageCaptioner>,
        refiner: Arc<dyn DescriptionRefiner>,
        collaborator_timeout: Duration,
    ) -> Self {
        Self {
            descriptions,
            audio,
            captioner,
            refiner,
            collaborator_timeout,
        }
    }

    #[tracing::instrument(
        skip_all,
        fields(bytes = image.len(), variant = %variant, voice = %voice)
    )]
    pub async fn describe(
        &self,
        image: Bytes,
        variant: DescriptionVariant,
        voice: Voice,
    ) -> Result<DescribeOutcome, ArtifactError> {
        let identity = identity_of(&image);
        tracing::debug!(identity = %identity, "Image identity computed");

        let profile = variant.caption_profile();
        let description = self
            .descriptions
            .get_or_create(&identity, &variant, || self.generate_description(&image, profile))
            .await?;

        let key = AudioKey::new(identity.clone(), variant, voice);
        let audio = self.audio.resolve(&key).await?;

        Ok(DescribeOutcome {
            identity,
            description,
            audio,
        })
    }

    async fn generate_description(
        &self,
        image: &[u8],
        profile: CaptionProfile,
    ) -> Result<String, ArtifactError> {
        let caption = bounded(
            "image captioner",
            self.collaborator_timeout,
            self.captioner.caption(image, profile),
            ArtifactError::CaptioningFailure,
        )
        .await?;

        tracing::debug!(detailed = profile.is_detailed(), "Initial caption generated");

        let refined = bounded(
            "description refiner",
            self.collaborator_timeout,
            self.refiner.refine(image, &caption),
            ArtifactError::CaptioningFailure,
        )
        .await?;

        Ok(refined.trim().to_string())
    }
}
