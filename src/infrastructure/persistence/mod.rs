mod description_store_factory;
mod in_memory_description_store;
mod redis_description_store;

pub use description_store_factory::DescriptionStoreFactory;
pub use in_memory_description_store::{InMemoryDescriptionStore, StoredRecord};
pub use redis_description_store::RedisDescriptionStore;
