//! Cache adapters.
//!
//! `RedisCache` for production deployments, `InMemoryCache` for tests and
//! single-process development.

mod in_memory;
mod redis;

pub use in_memory::InMemoryCache;
pub use redis::RedisCache;
