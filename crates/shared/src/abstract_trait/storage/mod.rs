use crate::errors::StorageError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSessionStorage = Arc<dyn SessionStorageTrait + Send + Sync>;

/// Durable key-value port the session store mirrors its record into.
#[async_trait]
pub trait SessionStorageTrait {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
