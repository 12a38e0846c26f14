pub mod cache_keys;
pub mod in_memory;
pub mod redis_cache;

use crate::core::errors::WalletError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{error, info};

pub use self::in_memory::InMemoryCache;
pub use self::redis_cache::RedisCache;

/// Freshness window shared by every cache-backed wallet endpoint.
pub const CACHE_TTL: Duration = Duration::from_secs(300);

#[async_trait]
pub trait Cache: Send + Sync {
    /// Stored bytes for `key`, or `None` when absent or expired
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, WalletError>;

    /// Overwrite `key` so that it expires `ttl` from now
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), WalletError>;
}

/// Cache selected at startup.
#[derive(Clone)]
pub enum CacheBackend {
    Redis(RedisCache),
    InMemory(InMemoryCache),
}

impl CacheBackend {
    /// Connects to Redis when a URL is configured, otherwise (or when the
    /// connection fails) keeps entries in process memory.
    pub async fn connect(redis_url: Option<&str>) -> Self {
        let Some(url) = redis_url else {
            info!("REDIS_URL not set, using in-memory cache");
            return CacheBackend::InMemory(InMemoryCache::new());
        };
        match RedisCache::connect(url).await {
            Ok(cache) => {
                info!("Connected to Redis cache");
                CacheBackend::Redis(cache)
            }
            Err(e) => {
                error!(error = %e, "Redis connection failed, falling back to in-memory cache");
                CacheBackend::InMemory(InMemoryCache::new())
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CacheBackend::Redis(_) => "redis",
            CacheBackend::InMemory(_) => "in-memory",
        }
    }
}

#[async_trait]
impl Cache for CacheBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, WalletError> {
        match self {
            CacheBackend::Redis(cache) => cache.get(key).await,
            CacheBackend::InMemory(cache) => cache.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), WalletError> {
        match self {
            CacheBackend::Redis(cache) => cache.set(key, value, ttl).await,
            CacheBackend::InMemory(cache) => cache.set(key, value, ttl).await,
        }
    }
}
