//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors raised by semantic validation of loaded values.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Invalid Redis URL format")]
    InvalidRedisUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("JWT secret must be at least 32 bytes")]
    JwtSecretTooShort,

    #[error("No AI provider configured")]
    NoAiProviderConfigured,

    #[error("Invalid from email address")]
    InvalidFromEmail,

    #[error("Invalid SMTP port")]
    InvalidSmtpPort,
}
