use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use crate::application::ports::{AudioStore, AudioStoreError, SpeechSynthesizer, SynthesisError};
use crate::domain::{AudioKey, StoragePath};

use super::artifact_error::bounded;
use super::keyed_locks::KeyedLocks;
use super::{ArtifactError, DescriptionCache};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAudio {
    pub key: AudioKey,
    pub path: StoragePath,
    pub synthesized: bool,
}

#[derive(Debug, Clone)]
pub struct ServedAudio {
    pub key: AudioKey,
    pub bytes: Bytes,
    pub regenerated: bool,
}

/// Produces audio artifacts for cached descriptions.
///
/// Blob existence is the only signal that audio was synthesized; a cached
/// description says nothing about its audio.
pub struct AudioArtifactResolver {
    store: Arc<dyn AudioStore>,
    descriptions: Arc<DescriptionCache>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    locks: KeyedLocks<AudioKey>,
    collaborator_timeout: Duration,
}

impl AudioArtifactResolver {
    pub fn new(
        store: Arc<dyn AudioStore>,
        descriptions: Arc<DescriptionCache>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        collaborator_timeout: Duration,
    ) -> Self {
        Self {
            store,
            descriptions,
            synthesizer,
            locks: KeyedLocks::new(),
            collaborator_timeout,
        }
    }

    #[tracing::instrument(skip_all, fields(audio = %key))]
    pub async fn resolve(&self, key: &AudioKey) -> Result<ResolvedAudio, ArtifactError> {
        let path = self.store.blob_path(key);

        if self.store.blob_exists(key).await? {
            tracing::debug!("Audio cache hit");
            return Ok(ResolvedAudio {
                key: key.clone(),
                path,
                synthesized: false,
            });
        }

        let _guard = self.locks.acquire(key.clone()).await;

        if self.store.blob_exists(key).await? {
            tracing::debug!("Audio synthesized by a concurrent request");
            return Ok(ResolvedAudio {
                key: key.clone(),
                path,
                synthesized: false,
            });
        }

        self.synthesize_into(key).await?;

        Ok(ResolvedAudio {
            key: key.clone(),
            path,
            synthesized: true,
        })
    }

    /// Reads the artifact named by a previously issued file name, repairing
    /// it once if it has gone missing since.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_for_serving(&self, file_name: &str) -> Result<ServedAudio, ArtifactError> {
        let key = AudioKey::parse_file_name(file_name)?;

        match self.store.read_blob(&key).await {
            Ok(bytes) => {
                return Ok(ServedAudio {
                    key,
                    bytes,
                    regenerated: false,
                });
            }
            Err(AudioStoreError::NotFound(_)) => {}
            Err(e) => return Err(e.into()),
        }

        tracing::warn!(audio = %key, "Audio artifact missing at serve time, regenerating");

        let resolved = self.resolve(&key).await?;
        let bytes = self.store.read_blob(&key).await?;

        tracing::info!(audio = %key, "Audio artifact repaired");

        Ok(ServedAudio {
            key,
            bytes,
            regenerated: resolved.synthesized,
        })
    }

    async fn synthesize_into(&self, key: &AudioKey) -> Result<(), ArtifactError> {
        let text = self
            .descriptions
            .get(&key.identity, &key.variant)
            .await?
            .ok_or_else(|| ArtifactError::MissingDescription {
                identity: key.identity.clone(),
                variant: key.variant.clone(),
            })?;

        tracing::info!(voice = %key.voice, "Synthesizing audio");

        let audio = bounded(
            "speech synthesizer",
            self.collaborator_timeout,
            self.synthesizer.synthesize(&text, key.voice),
            ArtifactError::SynthesisFailure,
        )
        .await?;

        if audio.is_empty() {
            return Err(ArtifactError::SynthesisFailure(SynthesisError::EmptyAudio));
        }

        let size = audio.len();
        self.store.write_blob(key, audio).await?;

        tracing::info!(bytes = size, "Audio artifact written");

        Ok(())
    }
}
