mod audio_store;
mod description_refiner;
mod description_store;
mod image_captioner;
mod speech_synthesizer;

pub use audio_store::{AudioStore, AudioStoreError};
pub use description_refiner::DescriptionRefiner;
pub use description_store::{DescriptionStore, DescriptionStoreError};
pub use image_captioner::{CaptioningError, ImageCaptioner};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
