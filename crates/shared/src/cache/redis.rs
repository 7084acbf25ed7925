use crate::{abstract_trait::SessionStorageTrait, errors::StorageError};
use async_trait::async_trait;
use deadpool_redis::{Connection, Pool, redis::AsyncCommands};
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Clone)]
pub struct RedisStorage {
    pub pool: Arc<Pool>,
}

impl RedisStorage {
    pub fn new(pool: Pool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    async fn get_conn(&self) -> Result<Connection, StorageError> {
        self.pool.get().await.map_err(|e| {
            error!("Failed to get Redis connection from pool: {:?}", e);
            StorageError::Pool(e)
        })
    }
}

#[async_trait]
impl SessionStorageTrait for RedisStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn.get(key).await?;

        match &value {
            Some(_) => debug!("Key found in redis: {key}"),
            None => debug!("Key not found in redis: {key}"),
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.get_conn().await?;
        let _: () = conn.set(key, value).await?;
        debug!("Key stored in redis: {key}");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut conn = self.get_conn().await?;
        let _: () = conn.del(key).await?;
        debug!("Key deleted from redis: {key}");
        Ok(())
    }
}
