//! Redis connection pool using deadpool-redis.

use deadpool_redis::{Config, Pool, Runtime};
use events_core::DomainError;
use redis::AsyncCommands;

/// Redis pool configuration
#[derive(Debug, Clone)]
pub struct RedisPoolConfig {
    /// Redis connection URL (e.g., `redis://localhost:6379`)
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: usize,
}

impl Default for RedisPoolConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            max_connections: 16,
        }
    }
}

impl From<&events_common::RedisConfig> for RedisPoolConfig {
    fn from(config: &events_common::RedisConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: config.max_connections as usize,
        }
    }
}

/// Error type for Redis pool operations
#[derive(Debug, thiserror::Error)]
pub enum RedisPoolError {
    #[error("Failed to create Redis pool: {0}")]
    CreatePool(String),

    #[error("Failed to get connection from pool: {0}")]
    GetConnection(#[from] deadpool_redis::PoolError),

    #[error("Redis command error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<RedisPoolError> for DomainError {
    fn from(err: RedisPoolError) -> Self {
        DomainError::CacheError(err.to_string())
    }
}

/// Result type for Redis pool operations
pub type RedisResult<T> = Result<T, RedisPoolError>;

/// Managed Redis connection pool
#[derive(Clone)]
pub struct RedisPool {
    pool: Pool,
}

impl std::fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisPool")
            .field("status", &self.pool.status())
            .finish()
    }
}

/// Strip credentials from a connection URL before logging it
fn redact_url(url: &str) -> &str {
    url.rsplit('@').next().unwrap_or(url)
}

impl RedisPool {
    /// Create a new Redis pool. Connections are opened lazily.
    pub fn new(config: RedisPoolConfig) -> RedisResult<Self> {
        let pool = Config::from_url(&config.url)
            .builder()
            .map_err(|e| RedisPoolError::CreatePool(e.to_string()))?
            .max_size(config.max_connections)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| RedisPoolError::CreatePool(e.to_string()))?;

        tracing::info!(
            url = %redact_url(&config.url),
            max_connections = config.max_connections,
            "Redis pool created"
        );

        Ok(Self { pool })
    }

    pub fn from_config(config: &events_common::RedisConfig) -> RedisResult<Self> {
        Self::new(RedisPoolConfig::from(config))
    }

    /// Get a connection from the pool
    pub async fn get(&self) -> RedisResult<deadpool_redis::Connection> {
        self.pool.get().await.map_err(RedisPoolError::GetConnection)
    }

    /// Ping Redis
    pub async fn health_check(&self) -> RedisResult<()> {
        let mut conn = self.get().await?;
        redis::cmd("PING").query_async::<String>(&mut conn).await?;
        Ok(())
    }

    /// Store a JSON-encoded value with an optional TTL
    pub async fn set<V: serde::Serialize>(
        &self,
        key: &str,
        value: &V,
        ttl_seconds: Option<u64>,
    ) -> RedisResult<()> {
        let mut conn = self.get().await?;
        let serialized = serde_json::to_string(value)?;

        match ttl_seconds {
            Some(ttl) => conn.set_ex::<_, _, ()>(key, &serialized, ttl).await?,
            None => conn.set::<_, _, ()>(key, &serialized).await?,
        }

        Ok(())
    }

    /// Read a JSON-encoded value
    pub async fn get_value<V: serde::de::DeserializeOwned>(
        &self,
        key: &str,
    ) -> RedisResult<Option<V>> {
        let mut conn = self.get().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(v) => Ok(Some(serde_json::from_str(&v)?)),
            None => Ok(None),
        }
    }

    /// Delete a key
    pub async fn delete(&self, key: &str) -> RedisResult<bool> {
        let mut conn = self.get().await?;
        let deleted: i32 = conn.del(key).await?;
        Ok(deleted > 0)
    }

    /// Delete multiple keys
    pub async fn delete_many(&self, keys: &[String]) -> RedisResult<usize> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.get().await?;
        let deleted: usize = conn.del(keys).await?;
        Ok(deleted)
    }
}
