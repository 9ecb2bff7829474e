//! AI provider port - interface for LLM text generation.
//!
//! Abstracts the external AI services (OpenAI, Gemini) so the scoring and
//! suggestion handlers never couple to a specific vendor API.

use async_trait::async_trait;

/// Port for AI/LLM provider interactions.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Generate a single completion.
    async fn complete(&self, request: AiRequest) -> Result<AiCompletion, AiError>;

    /// Provider name for logging and attribution (e.g. "openai", "gemini").
    fn name(&self) -> &str;
}

/// A prompt for the provider.
#[derive(Debug, Clone)]
pub struct AiRequest {
    pub system_prompt: Option<String>,
    pub user_prompt: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl AiRequest {
    pub fn new(user_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: None,
            user_prompt: user_prompt.into(),
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }
}

/// Completion text plus the provider that produced it.
#[derive(Debug, Clone)]
pub struct AiCompletion {
    pub content: String,
    pub provider: String,
    pub model: String,
}

/// AI provider errors.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// Provider returned a 5xx or is otherwise down.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// API key rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },

    /// Failed to parse the provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl AiError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Whether the failover wrapper should try the secondary provider.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AiError::RateLimited { .. }
                | AiError::Unavailable { .. }
                | AiError::Network(_)
                | AiError::Timeout { .. }
        )
    }
}
