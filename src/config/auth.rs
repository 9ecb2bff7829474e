//! Authentication configuration.

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for JWT verification.
    pub jwt_secret: String,
}

impl AuthConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::MissingRequired("auth.jwt_secret"));
        }
        if self.jwt_secret.len() < 32 {
            return Err(ValidationError::JwtSecretTooShort);
        }
        Ok(())
    }
}
