mod audio_key;
mod description_variant;
mod image_format;
mod image_identity;
mod invalid_key;
mod storage_path;
mod voice;

pub use audio_key::AudioKey;
pub use description_variant::{CaptionProfile, DescriptionVariant};
pub use image_format::sniff_image_mime;
pub use image_identity::{ImageIdentity, identity_of};
pub use invalid_key::InvalidKey;
pub use storage_path::StoragePath;
pub use voice::Voice;
