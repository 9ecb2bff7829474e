//! Scripted AiProvider for tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::{AiCompletion, AiError, AiProvider, AiRequest};

type ErrorFactory = Box<dyn Fn() -> AiError + Send + Sync>;

/// Mock provider returning a fixed reply or a scripted error, counting calls.
pub struct MockAiProvider {
    name: String,
    reply: Option<String>,
    error: Option<ErrorFactory>,
    calls: AtomicUsize,
}

impl MockAiProvider {
    /// A provider that always answers with `reply`.
    pub fn replying(name: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reply: Some(reply.into()),
            error: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// A provider that always fails with the scripted error.
    pub fn failing(
        name: impl Into<String>,
        error: impl Fn() -> AiError + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            reply: None,
            error: Some(Box::new(error)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of completion calls received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(&self, _request: AiRequest) -> Result<AiCompletion, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(make_error) = &self.error {
            return Err(make_error());
        }
        Ok(AiCompletion {
            content: self.reply.clone().unwrap_or_default(),
            provider: self.name.clone(),
            model: format!("{}-mock", self.name),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
