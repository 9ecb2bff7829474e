//! Adapters - concrete implementations of the ports.
//!
//! Repositories over PostgreSQL, the cache over Redis (or memory in
//! tests), AI providers over HTTP, email over SMTP, and the HTTP API
//! over axum.

pub mod ai;
pub mod auth;
pub mod cache;
pub mod email;
pub mod http;
pub mod postgres;
pub mod scheduler;
