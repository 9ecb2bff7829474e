//! OpenAI implementation of the AiProvider port.
//!
//! Calls the chat completions endpoint. Transient failures (429, 5xx,
//! timeouts) map to retryable errors so the failover wrapper can react.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{AiCompletion, AiError, AiProvider, AiRequest};

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI chat completions provider.
pub struct OpenAiProvider {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn to_api_request(&self, request: &AiRequest) -> ChatRequest {
        let mut messages = Vec::new();
        if let Some(ref prompt) = request.system_prompt {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: prompt.clone(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: request.user_prompt.clone(),
        });

        ChatRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    async fn send_request(&self, request: &AiRequest) -> Result<Response, AiError> {
        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&self.to_api_request(request))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AiError::network(format!("Connection failed: {}", e))
                } else {
                    AiError::network(e.to_string())
                }
            })
    }

    async fn handle_response_status(&self, response: Response) -> Result<Response, AiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            401 => Err(AiError::AuthenticationFailed),
            429 => Err(AiError::RateLimited {
                retry_after_secs: parse_retry_after(&error_body),
            }),
            400 => Err(AiError::InvalidRequest(error_body)),
            500..=599 => Err(AiError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(AiError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    async fn parse_response(&self, response: Response) -> Result<AiCompletion, AiError> {
        let response = self.handle_response_status(response).await?;

        let api_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| AiError::parse(format!("Failed to parse response: {}", e)))?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AiError::parse("No choices in response"))?;

        Ok(AiCompletion {
            content: choice.message.content,
            provider: "openai".to_string(),
            model: api_response.model,
        })
    }
}

/// OpenAI sometimes names a wait time in the 429 body ("try again in Xs").
fn parse_retry_after(error_body: &str) -> u32 {
    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
        if let Some(msg) = parsed
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            if let Some(idx) = msg.find("try again in ") {
                let rest = &msg[idx + 13..];
                if let Some(num_end) = rest.find(|c: char| !c.is_ascii_digit()) {
                    if let Ok(secs) = rest[..num_end].parse::<u32>() {
                        return secs;
                    }
                }
            }
        }
    }
    30
}

#[async_trait]
impl AiProvider for OpenAiProvider {
    async fn complete(&self, request: AiRequest) -> Result<AiCompletion, AiError> {
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    model: String,
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
