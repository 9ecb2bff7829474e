//! AI provider configuration.
//!
//! At least one provider key must be present. When both are set, OpenAI
//! is the primary and Gemini the failover target.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AiConfig {
    pub openai_api_key: Option<String>,

    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    pub gemini_api_key: Option<String>,

    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl AiConfig {
    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_openai() && !self.has_gemini() {
            return Err(ValidationError::NoAiProviderConfigured);
        }
        Ok(())
    }
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}
