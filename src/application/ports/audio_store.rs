use std::io;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{AudioKey, StoragePath};

/// Blob storage for synthesized audio.
#[async_trait]
pub trait AudioStore: Send + Sync {
    async fn blob_exists(&self, key: &AudioKey) -> Result<bool, AudioStoreError>;

    /// Overwrites unconditionally. The blob becomes visible only once fully
    /// written.
    async fn write_blob(&self, key: &AudioKey, bytes: Bytes) -> Result<(), AudioStoreError>;

    async fn read_blob(&self, key: &AudioKey) -> Result<Bytes, AudioStoreError>;

    /// Pure derivation; the blob does not need to exist.
    fn blob_path(&self, key: &AudioKey) -> StoragePath {
        key.storage_path()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("audio store unavailable: {0}")]
    Unavailable(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
