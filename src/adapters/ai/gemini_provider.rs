//! Google Gemini implementation of the AiProvider port.
//!
//! Calls the generateContent endpoint. The API key travels as a query
//! parameter rather than a header.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{AiCompletion, AiError, AiProvider, AiRequest};

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
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

/// Gemini generateContent provider.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    fn to_api_request(&self, request: &AiRequest) -> GenerateRequest {
        GenerateRequest {
            system_instruction: request.system_prompt.as_ref().map(|prompt| Content {
                role: None,
                parts: vec![Part {
                    text: prompt.clone(),
                }],
            }),
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: request.user_prompt.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: request.max_tokens,
                temperature: request.temperature,
            },
        }
    }

    async fn send_request(&self, request: &AiRequest) -> Result<Response, AiError> {
        self.client
            .post(self.generate_url())
            .query(&[("key", self.config.api_key())])
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

    async fn parse_response(&self, response: Response) -> Result<AiCompletion, AiError> {
        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return match status.as_u16() {
                401 | 403 => Err(AiError::AuthenticationFailed),
                429 => Err(AiError::RateLimited {
                    retry_after_secs: 30,
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
            };
        }

        let api_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AiError::parse(format!("Failed to parse response: {}", e)))?;

        let text = api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AiError::parse("No candidates in response"))?;

        Ok(AiCompletion {
            content: text,
            provider: "gemini".to_string(),
            model: self.config.model.clone(),
        })
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn complete(&self, request: AiRequest) -> Result<AiCompletion, AiError> {
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_includes_model() {
        let provider = GeminiProvider::new(
            GeminiConfig::new("key").with_base_url("http://localhost:9999/v1beta"),
        );
        assert_eq!(
            provider.generate_url(),
            "http://localhost:9999/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn system_prompt_becomes_system_instruction() {
        let provider = GeminiProvider::new(GeminiConfig::new("key"));
        let request = AiRequest::new("Summarize").with_system_prompt("Be brief");
        let api_request = provider.to_api_request(&request);

        assert!(api_request.system_instruction.is_some());
        assert_eq!(api_request.contents.len(), 1);
        assert_eq!(api_request.contents[0].role.as_deref(), Some("user"));
    }
}
