use std::future::Future;
use std::sync::Arc;

use crate::application::ports::{CaptioningError, DescriptionStore};
use crate::domain::{DescriptionVariant, ImageIdentity};
use crate::infrastructure::observability::preview_text;

use super::ArtifactError;
use super::keyed_locks::KeyedLocks;

/// Memoizes one description per (identity, variant).
///
/// Population is single-flight per key: concurrent misses for the same key
/// wait for the first producer and then read its result. A record is written
/// only after the producer has returned the full text.
pub struct DescriptionCache {
    store: Arc<dyn DescriptionStore>,
    locks: KeyedLocks<(ImageIdentity, DescriptionVariant)>,
}

impl DescriptionCache {
    pub fn new(store: Arc<dyn DescriptionStore>) -> Self {
        Self {
            store,
            locks: KeyedLocks::new(),
        }
    }

    /// Stored text for the key. Blank records read as absent.
    pub async fn get(
        &self,
        identity: &ImageIdentity,
        variant: &DescriptionVariant,
    ) -> Result<Option<String>, ArtifactError> {
        let record = self.store.get_record(identity, variant).await?;
        Ok(record.filter(|text| !text.trim().is_empty()))
    }

    #[tracing::instrument(skip_all, fields(identity = %identity, variant = %variant))]
    pub async fn get_or_create<F, Fut>(
        &self,
        identity: &ImageIdentity,
        variant: &DescriptionVariant,
        produce: F,
    ) -> Result<String, ArtifactError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, ArtifactError>>,
    {
        if self.store.record_exists(identity, variant).await? {
            if let Some(text) = self.get(identity, variant).await? {
                tracing::debug!("Description cache hit");
                return Ok(text);
            }
            tracing::warn!("Stored description is blank, regenerating");
        }

        let _guard = self
            .locks
            .acquire((identity.clone(), variant.clone()))
            .await;

        if let Some(text) = self.get(identity, variant).await? {
            tracing::debug!("Description populated by a concurrent request");
            return Ok(text);
        }

        tracing::info!("Description cache miss, generating");
        let text = produce().await?;

        if text.trim().is_empty() {
            return Err(ArtifactError::CaptioningFailure(
                CaptioningError::EmptyDescription,
            ));
        }

        self.store.put_record(identity, variant, &text).await?;

        tracing::info!(description = %preview_text(&text), "Description cached");

        Ok(text)
    }
}
