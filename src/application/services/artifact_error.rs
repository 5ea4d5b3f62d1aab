use std::future::Future;
use std::time::Duration;

use crate::application::ports::{
    AudioStoreError, CaptioningError, DescriptionStoreError, SynthesisError,
};
use crate::domain::{DescriptionVariant, ImageIdentity, InvalidKey};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("no {variant} description cached for {identity}")]
    MissingDescription {
        identity: ImageIdentity,
        variant: DescriptionVariant,
    },
    #[error("captioning failed: {0}")]
    CaptioningFailure(#[source] CaptioningError),
    #[error("synthesis failed: {0}")]
    SynthesisFailure(#[source] SynthesisError),
    #[error("{collaborator} timed out after {}s", timeout.as_secs())]
    CollaboratorTimeout {
        collaborator: &'static str,
        timeout: Duration,
    },
}

impl ArtifactError {
    /// Stable name of the error kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ArtifactError::InvalidKey(_) => "invalid_key",
            ArtifactError::StorageUnavailable(_) => "storage_unavailable",
            ArtifactError::MissingDescription { .. } => "missing_description",
            ArtifactError::CaptioningFailure(_) => "captioning_failure",
            ArtifactError::SynthesisFailure(_) => "synthesis_failure",
            ArtifactError::CollaboratorTimeout { .. } => "collaborator_timeout",
        }
    }
}

impl From<InvalidKey> for ArtifactError {
    fn from(e: InvalidKey) -> Self {
        ArtifactError::InvalidKey(e.to_string())
    }
}

impl From<DescriptionStoreError> for ArtifactError {
    fn from(e: DescriptionStoreError) -> Self {
        match e {
            DescriptionStoreError::Unavailable(msg) => ArtifactError::StorageUnavailable(msg),
        }
    }
}

impl From<AudioStoreError> for ArtifactError {
    fn from(e: AudioStoreError) -> Self {
        ArtifactError::StorageUnavailable(e.to_string())
    }
}

/// Runs a collaborator call under a deadline.
pub(crate) async fn bounded<T, E, Fut>(
    collaborator: &'static str,
    timeout: Duration,
    call: Fut,
    on_error: impl FnOnce(E) -> ArtifactError,
) -> Result<T, ArtifactError>
where
    Fut: Future<Output = Result<T, E>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result.map_err(on_error),
        Err(_) => Err(ArtifactError::CollaboratorTimeout {
            collaborator,
            timeout,
        }),
    }
}
