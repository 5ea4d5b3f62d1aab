use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::AudioKey;

/// Audio blobs on any `object_store` backend, one object per audio key.
///
/// `put` is atomic on every backend used here (the local filesystem stages
/// to a temporary file and renames), so readers never see a partial blob.
pub struct ObjectAudioStore {
    inner: Arc<dyn ObjectStore>,
}

impl ObjectAudioStore {
    pub fn new(inner: Arc<dyn ObjectStore>) -> Self {
        Self { inner }
    }

    pub fn local(base_path: PathBuf) -> Result<Self, AudioStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| AudioStoreError::Unavailable(e.to_string()))?;
        Ok(Self::new(Arc::new(fs)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemory::new()))
    }

    pub fn azure(
        account: &str,
        access_key: &str,
        container: &str,
    ) -> Result<Self, AudioStoreError> {
        let store = MicrosoftAzureBuilder::new()
            .with_account(account)
            .with_access_key(access_key)
            .with_container_name(container)
            .build()
            .map_err(|e| AudioStoreError::Unavailable(e.to_string()))?;
        Ok(Self::new(Arc::new(store)))
    }

    /// Removes the blob for `key`; missing blobs are not an error.
    pub async fn delete_blob(&self, key: &AudioKey) -> Result<(), AudioStoreError> {
        match self.inner.delete(&object_path(key)).await {
            Ok(()) | Err(object_store::Error::NotFound { .. }) => Ok(()),
            Err(e) => Err(AudioStoreError::Unavailable(e.to_string())),
        }
    }
}

fn object_path(key: &AudioKey) -> StorePath {
    StorePath::from(key.storage_path().as_str())
}

// The blob can vanish between `get` and reading its body.
fn read_error(path: &StorePath, e: object_store::Error) -> AudioStoreError {
    match e {
        object_store::Error::NotFound { .. } => AudioStoreError::NotFound(path.to_string()),
        other => AudioStoreError::Unavailable(other.to_string()),
    }
}

#[async_trait]
impl AudioStore for ObjectAudioStore {
    async fn blob_exists(&self, key: &AudioKey) -> Result<bool, AudioStoreError> {
        match self.inner.head(&object_path(key)).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(AudioStoreError::Unavailable(e.to_string())),
        }
    }

    async fn write_blob(&self, key: &AudioKey, bytes: Bytes) -> Result<(), AudioStoreError> {
        self.inner
            .put(&object_path(key), PutPayload::from(bytes))
            .await
            .map_err(|e| AudioStoreError::Unavailable(e.to_string()))?;
        Ok(())
    }

    async fn read_blob(&self, key: &AudioKey) -> Result<Bytes, AudioStoreError> {
        let path = object_path(key);
        let result = self
            .inner
            .get(&path)
            .await
            .map_err(|e| read_error(&path, e))?;

        result.bytes().await.map_err(|e| read_error(&path, e))
    }
}
