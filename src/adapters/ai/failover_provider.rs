//! Failover wrapper around two AI providers.
//!
//! Retryable errors from the primary (rate limit, unavailable, network,
//! timeout) route the request to the fallback. Non-retryable errors
//! propagate unchanged.

use async_trait::async_trait;
use std::sync::Arc;

use crate::ports::{AiCompletion, AiError, AiProvider, AiRequest};

/// Primary/fallback pair behind a single AiProvider.
pub struct FailoverProvider {
    primary: Arc<dyn AiProvider>,
    fallback: Option<Arc<dyn AiProvider>>,
}

impl FailoverProvider {
    pub fn new(primary: Arc<dyn AiProvider>) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn AiProvider>) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

#[async_trait]
impl AiProvider for FailoverProvider {
    async fn complete(&self, request: AiRequest) -> Result<AiCompletion, AiError> {
        let primary_error = match self.primary.complete(request.clone()).await {
            Ok(completion) => return Ok(completion),
            Err(err) => err,
        };

        if !primary_error.is_retryable() {
            return Err(primary_error);
        }

        match &self.fallback {
            Some(fallback) => {
                tracing::warn!(
                    primary = self.primary.name(),
                    fallback = fallback.name(),
                    error = %primary_error,
                    "primary AI provider failed, using fallback"
                );
                fallback.complete(request).await
            }
            None => Err(primary_error),
        }
    }

    fn name(&self) -> &str {
        self.primary.name()
    }
}
