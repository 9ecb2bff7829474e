//! Cache port with TTL-based expiry.
//!
//! Callers treat cache failures as misses: analytics reads through this
//! port and falls back to the live query when the cache is unavailable.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::foundation::DomainError;

/// Port for a string-keyed cache of serialized values.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Fetch a cached value. `Ok(None)` on miss or expiry.
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Store a value with a time-to-live.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Remove a key; removing a missing key is not an error.
    async fn invalidate(&self, key: &str) -> Result<(), DomainError>;
}
