//! Token validation adapters.
//!
//! The HTTP middleware validates Bearer tokens through the TokenValidator
//! trait, keeping it independent of the token format. Production uses
//! `JwtTokenValidator`; tests use `MockTokenValidator`.

mod jwt_validator;
mod mock_validator;

pub use jwt_validator::JwtTokenValidator;
pub use mock_validator::MockTokenValidator;

use async_trait::async_trait;
use thiserror::Error;

use crate::application::Caller;

/// Token validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("token expired")]
    TokenExpired,

    #[error("invalid token")]
    InvalidToken,
}

/// Validates a bearer token into a Caller.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    async fn validate(&self, token: &str) -> Result<Caller, AuthError>;
}
