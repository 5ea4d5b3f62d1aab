use std::sync::Arc;

use crate::application::ports::{
    CaptioningError, DescriptionRefiner, ImageCaptioner, SpeechSynthesizer, SynthesisError,
};
use crate::presentation::config::{CaptioningSettings, SpeechSettings};

use super::audio::{OpenAiSpeechSynthesizer, SilentSynthesizer, SpeakerProfiles};
use super::vision::{OpenAiVisionCaptioner, PassthroughRefiner, StaticCaptioner};

/// The model-backed functions the describe workflow calls out to.
#[derive(Clone)]
pub struct Collaborators {
    pub captioner: Arc<dyn ImageCaptioner>,
    pub refiner: Arc<dyn DescriptionRefiner>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
}

#[derive(Debug, thiserror::Error)]
pub enum CollaboratorFactoryError {
    #[error("captioner: {0}")]
    Captioning(#[from] CaptioningError),
    #[error("synthesizer: {0}")]
    Synthesis(#[from] SynthesisError),
}

impl Collaborators {
    pub fn from_settings(
        captioning: &CaptioningSettings,
        speech: &SpeechSettings,
    ) -> Result<Self, CollaboratorFactoryError> {
        let captioner = OpenAiVisionCaptioner::new(
            &captioning.base_url,
            &captioning.model,
            &captioning.api_key,
        )?;

        let speakers = SpeakerProfiles {
            female: speech.female_speaker.clone(),
            male: speech.male_speaker.clone(),
        };
        let synthesizer = OpenAiSpeechSynthesizer::new(
            &speech.base_url,
            &speech.model,
            &speech.api_key,
            speakers,
        )?;

        Ok(Self {
            captioner: Arc::new(captioner),
            refiner: Arc::new(PassthroughRefiner),
            synthesizer: Arc::new(synthesizer),
        })
    }

    pub fn scaffold() -> Self {
        Self {
            captioner: Arc::new(StaticCaptioner::default()),
            refiner: Arc::new(PassthroughRefiner),
            synthesizer: Arc::new(SilentSynthesizer),
        }
    }
}
