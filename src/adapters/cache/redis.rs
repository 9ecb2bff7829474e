//! Redis-backed cache for analytics read-through.
//!
//! Values are stored with SET EX so Redis expires them server-side.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::Cache;

/// Redis implementation of the Cache port.
#[derive(Clone)]
pub struct RedisCache {
    conn: MultiplexedConnection,
}

impl RedisCache {
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }
}

fn cache_error(action: &str, e: redis::RedisError) -> DomainError {
    DomainError::new(
        ErrorCode::CacheError,
        format!("Failed to {}: {}", action, e),
    )
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let mut conn = self.conn.clone();
        conn.get(key)
            .await
            .map_err(|e| cache_error("read cache key", e))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();
        // SET EX requires a TTL of at least one second.
        let ttl_secs = ttl.as_secs().max(1);
        conn.set_ex(key, value, ttl_secs)
            .await
            .map_err(|e| cache_error("write cache key", e))
    }

    async fn invalidate(&self, key: &str) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();
        conn.del(key)
            .await
            .map_err(|e| cache_error("delete cache key", e))
    }
}
