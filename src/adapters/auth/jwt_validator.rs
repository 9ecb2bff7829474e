//! JWT implementation of TokenValidator.
//!
//! Expects HS256 tokens with `sub` holding the user id and `role` the
//! role string.

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::Caller;
use crate::domain::foundation::{Role, UserId};

use super::{AuthError, TokenValidator};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    role: String,
    exp: u64,
}

/// Validates HS256-signed JWTs against a shared secret.
pub struct JwtTokenValidator {
    secret: Secret<String>,
}

impl JwtTokenValidator {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Secret::new(secret.into()),
        }
    }

    fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.secret.expose_secret().as_bytes())
    }
}

#[async_trait]
impl TokenValidator for JwtTokenValidator {
    async fn validate(&self, token: &str) -> Result<Caller, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key(), &Validation::default())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })?;

        let user_id = data
            .claims
            .sub
            .parse::<Uuid>()
            .map(UserId::from_uuid)
            .map_err(|_| AuthError::InvalidToken)?;
        let role = data
            .claims
            .role
            .parse::<Role>()
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(Caller::new(user_id, role))
    }
}
