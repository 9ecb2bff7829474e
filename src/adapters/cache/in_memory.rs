//! In-memory cache with TTL expiry, for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use crate::domain::foundation::DomainError;
use crate::ports::Cache;

/// In-memory implementation of the Cache port. Entries expire lazily on
/// read.
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, (String, Instant)>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let expired = {
            let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
            match entries.get(key) {
                Some((value, expires_at)) => {
                    if Instant::now() < *expires_at {
                        return Ok(Some(value.clone()));
                    }
                    true
                }
                None => false,
            }
        };

        if expired {
            let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
            entries.remove(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> Result<(), DomainError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}
