use async_trait::async_trait;

use crate::domain::{DescriptionVariant, ImageIdentity};

/// Durable record store for description text, keyed by identity with one
/// field per variant.
///
/// Implementations treat a record of an unexpected shape as absent rather
/// than surfacing a type error.
#[async_trait]
pub trait DescriptionStore: Send + Sync {
    async fn record_exists(
        &self,
        identity: &ImageIdentity,
        variant: &DescriptionVariant,
    ) -> Result<bool, DescriptionStoreError>;

    async fn get_record(
        &self,
        identity: &ImageIdentity,
        variant: &DescriptionVariant,
    ) -> Result<Option<String>, DescriptionStoreError>;

    /// Upsert; a second write for the same key replaces the first.
    async fn put_record(
        &self,
        identity: &ImageIdentity,
        variant: &DescriptionVariant,
        text: &str,
    ) -> Result<(), DescriptionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DescriptionStoreError {
    #[error("description store unavailable: {0}")]
    Unavailable(String),
}
