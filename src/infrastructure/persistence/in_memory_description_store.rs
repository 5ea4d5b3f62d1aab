use std::collections::HashMap;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::application::ports::{DescriptionStore, DescriptionStoreError};
use crate::domain::{DescriptionVariant, ImageIdentity};

/// Value held under a record key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredRecord {
    Fields(HashMap<String, String>),
    /// Something another writer left in the shared key space.
    Opaque(Vec<u8>),
}

/// Process-local description store. Lost on restart; used by tests and
/// scaffold mode.
#[derive(Default)]
pub struct InMemoryDescriptionStore {
    records: DashMap<String, StoredRecord>,
}

impl InMemoryDescriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places an arbitrary value under `identity`, bypassing the record shape.
    pub fn insert_raw(&self, identity: &ImageIdentity, record: StoredRecord) {
        self.records.insert(identity.to_string(), record);
    }

    pub fn raw(&self, identity: &ImageIdentity) -> Option<StoredRecord> {
        self.records
            .get(identity.as_str())
            .map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn reset_foreign(&self, key: &str) {
        if self
            .records
            .remove_if(key, |_, record| matches!(record, StoredRecord::Opaque(_)))
            .is_some()
        {
            tracing::warn!(key = %key, "Record key has unexpected shape, resetting");
        }
    }
}

#[async_trait]
impl DescriptionStore for InMemoryDescriptionStore {
    async fn record_exists(
        &self,
        identity: &ImageIdentity,
        variant: &DescriptionVariant,
    ) -> Result<bool, DescriptionStoreError> {
        Ok(self.get_record(identity, variant).await?.is_some())
    }

    async fn get_record(
        &self,
        identity: &ImageIdentity,
        variant: &DescriptionVariant,
    ) -> Result<Option<String>, DescriptionStoreError> {
        self.reset_foreign(identity.as_str());

        Ok(self
            .records
            .get(identity.as_str())
            .and_then(|entry| match entry.value() {
                StoredRecord::Fields(fields) => fields.get(&variant.encoded()).cloned(),
                StoredRecord::Opaque(_) => None,
            }))
    }

    async fn put_record(
        &self,
        identity: &ImageIdentity,
        variant: &DescriptionVariant,
        text: &str,
    ) -> Result<(), DescriptionStoreError> {
        self.reset_foreign(identity.as_str());

        let mut entry = self
            .records
            .entry(identity.to_string())
            .or_insert_with(|| StoredRecord::Fields(HashMap::new()));

        if let StoredRecord::Fields(fields) = entry.value_mut() {
            fields.insert(variant.encoded(), text.to_string());
        } else {
            *entry = StoredRecord::Fields(HashMap::from([(
                variant.encoded(),
                text.to_string(),
            )]));
        }

        Ok(())
    }
}
