//! AI provider adapters.
//!
//! Implementations of the AiProvider port:
//!
//! - `OpenAiProvider` - OpenAI chat completions
//! - `GeminiProvider` - Google Gemini generateContent
//! - `FailoverProvider` - primary/fallback wrapper for transient failures
//! - `MockAiProvider` - scripted provider for tests

mod failover_provider;
mod gemini_provider;
mod mock_provider;
mod openai_provider;

pub use failover_provider::FailoverProvider;
pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_provider::MockAiProvider;
pub use openai_provider::{OpenAiConfig, OpenAiProvider};
