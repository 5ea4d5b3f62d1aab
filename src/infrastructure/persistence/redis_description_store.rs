use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::application::ports::{DescriptionStore, DescriptionStoreError};
use crate::domain::{DescriptionVariant, ImageIdentity};

/// Descriptions kept as one Redis hash per image identity, one field per
/// variant (named by its encoded form).
///
/// The key space may be shared with other caches. A key holding anything
/// other than a hash is deleted and read as absent.
#[derive(Clone)]
pub struct RedisDescriptionStore {
    connection: ConnectionManager,
    key_prefix: String,
}

impl RedisDescriptionStore {
    pub async fn connect(url: &str, key_prefix: &str) -> Result<Self, DescriptionStoreError> {
        let client = redis::Client::open(url)
            .map_err(|e| DescriptionStoreError::Unavailable(format!("invalid redis url: {e}")))?;

        let connection = ConnectionManager::new(client).await.map_err(unavailable)?;

        tracing::info!(key_prefix = %key_prefix, "Connected to Redis description store");

        Ok(Self {
            connection,
            key_prefix: key_prefix.to_string(),
        })
    }

    pub fn record_key(&self, identity: &ImageIdentity) -> String {
        format!("{}{}", self.key_prefix, identity)
    }

    /// Whether `key` currently holds a hash. Foreign-typed values are removed.
    async fn ensure_hash(
        &self,
        connection: &mut ConnectionManager,
        key: &str,
    ) -> Result<bool, DescriptionStoreError> {
        let key_type: String = redis::cmd("TYPE")
            .arg(key)
            .query_async(connection)
            .await
            .map_err(unavailable)?;

        match key_type.as_str() {
            "hash" => Ok(true),
            "none" => Ok(false),
            other => {
                tracing::warn!(key = %key, found = %other, "Record key has unexpected type, resetting");
                connection.del::<_, ()>(key).await.map_err(unavailable)?;
                Ok(false)
            }
        }
    }
}

fn unavailable(e: redis::RedisError) -> DescriptionStoreError {
    DescriptionStoreError::Unavailable(e.to_string())
}

#[async_trait]
impl DescriptionStore for RedisDescriptionStore {
    async fn record_exists(
        &self,
        identity: &ImageIdentity,
        variant: &DescriptionVariant,
    ) -> Result<bool, DescriptionStoreError> {
        let key = self.record_key(identity);
        let mut connection = self.connection.clone();

        if !self.ensure_hash(&mut connection, &key).await? {
            return Ok(false);
        }

        connection
            .hexists(&key, variant.encoded())
            .await
            .map_err(unavailable)
    }

    async fn get_record(
        &self,
        identity: &ImageIdentity,
        variant: &DescriptionVariant,
    ) -> Result<Option<String>, DescriptionStoreError> {
        let key = self.record_key(identity);
        let mut connection = self.connection.clone();

        if !self.ensure_hash(&mut connection, &key).await? {
            return Ok(None);
        }

        let raw: Option<Vec<u8>> = connection
            .hget(&key, variant.encoded())
            .await
            .map_err(unavailable)?;

        Ok(raw.and_then(|bytes| match String::from_utf8(bytes) {
            Ok(text) => Some(text),
            Err(_) => {
                tracing::warn!(key = %key, variant = %variant, "Stored description is not UTF-8, ignoring");
                None
            }
        }))
    }

    async fn put_record(
        &self,
        identity: &ImageIdentity,
        variant: &DescriptionVariant,
        text: &str,
    ) -> Result<(), DescriptionStoreError> {
        let key = self.record_key(identity);
        let mut connection = self.connection.clone();

        self.ensure_hash(&mut connection, &key).await?;

        connection
            .hset::<_, _, _, ()>(&key, variant.encoded(), text)
            .await
            .map_err(unavailable)
    }
}
