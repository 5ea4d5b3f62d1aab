mod openai_vision_captioner;
mod passthrough_refiner;
mod static_captioner;

pub use openai_vision_captioner::OpenAiVisionCaptioner;
pub use passthrough_refiner::PassthroughRefiner;
pub use static_captioner::StaticCaptioner;
