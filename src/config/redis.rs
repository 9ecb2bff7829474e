//! Redis configuration.

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    /// Redis connection URL.
    #[serde(default = "default_url")]
    pub url: String,
}

impl RedisConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("redis.url"));
        }
        if !self.url.starts_with("redis://") && !self.url.starts_with("rediss://") {
            return Err(ValidationError::InvalidRedisUrl);
        }
        Ok(())
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

fn default_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_validates() {
        assert!(RedisConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_redis_scheme() {
        let config = RedisConfig {
            url: "http://localhost:6379".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidRedisUrl)
        ));
    }
}
