mod openai_speech_synthesizer;
mod silent_synthesizer;

pub use openai_speech_synthesizer::{OpenAiSpeechSynthesizer, SpeakerProfiles};
pub use silent_synthesizer::SilentSynthesizer;
