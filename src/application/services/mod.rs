mod artifact_error;
mod audio_resolver;
mod describe_service;
mod description_cache;
mod keyed_locks;

pub use artifact_error::ArtifactError;
pub use audio_resolver::{AudioArtifactResolver, ResolvedAudio, ServedAudio};
pub use describe_service::{DescribeOutcome, DescribeService};
pub use description_cache::DescriptionCache;
pub use keyed_locks::{KeyedLockGuard, KeyedLocks};
