use crate::core::errors::WalletError;
use crate::infrastructure::cache::Cache;
use async_trait::async_trait;
use redis::RedisResult;
use redis::aio::ConnectionManager;
use std::time::Duration;

/// Redis-backed cache. Expiry is delegated to Redis via `SET .. EX`.
///
/// `ConnectionManager` reconnects on its own and is cheap to clone, so every
/// call works on its own handle and no lock is shared between requests.
#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
}

impl RedisCache {
    pub async fn connect(redis_url: &str) -> Result<Self, WalletError> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| WalletError::StorageUnavailable(format!("Failed to create Redis client: {e}")))?;
        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| WalletError::StorageUnavailable(format!("Failed to connect to Redis: {e}")))?;
        Ok(RedisCache { connection })
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, WalletError> {
        let mut conn = self.connection.clone();
        let value: RedisResult<Option<Vec<u8>>> = redis::cmd("GET").arg(key).query_async(&mut conn).await;
        value.map_err(WalletError::from)
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), WalletError> {
        let mut conn = self.connection.clone();
        // EX rejects a zero expiry
        let seconds = ttl.as_secs().max(1);
        let result: RedisResult<()> = redis::cmd("SET")
            .arg(key)
            .arg(value.as_slice())
            .arg("EX")
            .arg(seconds)
            .query_async(&mut conn)
            .await;
        result.map_err(WalletError::from)
    }
}
