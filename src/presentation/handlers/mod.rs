mod audio;
mod describe_image;
mod error_response;
mod health;

pub use audio::audio_handler;
pub use describe_image::{DescribeImageResponse, describe_image_handler};
pub use error_response::ErrorResponse;
pub use health::health_handler;
