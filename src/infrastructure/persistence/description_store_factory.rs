use std::sync::Arc;

use crate::application::ports::{DescriptionStore, DescriptionStoreError};
use crate::presentation::config::{DescriptionStoreProvider, DescriptionStoreSettings};

use super::in_memory_description_store::InMemoryDescriptionStore;
use super::redis_description_store::RedisDescriptionStore;

pub struct DescriptionStoreFactory;

impl DescriptionStoreFactory {
    pub async fn create(
        settings: &DescriptionStoreSettings,
    ) -> Result<Arc<dyn DescriptionStore>, DescriptionStoreError> {
        match settings.provider {
            DescriptionStoreProvider::Redis => {
                let store =
                    RedisDescriptionStore::connect(&settings.redis_url, &settings.key_prefix)
                        .await?;
                Ok(Arc::new(store))
            }
            DescriptionStoreProvider::Memory => {
                tracing::warn!(
                    "Using in-memory description store, descriptions will not survive restarts"
                );
                Ok(Arc::new(InMemoryDescriptionStore::new()))
            }
        }
    }
}
