//! Mock TokenValidator mapping fixed token strings to callers.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::application::Caller;

use super::{AuthError, TokenValidator};

/// Test validator with a fixed token-to-caller table.
#[derive(Default)]
pub struct MockTokenValidator {
    callers: HashMap<String, Caller>,
}

impl MockTokenValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_caller(mut self, token: impl Into<String>, caller: Caller) -> Self {
        self.callers.insert(token.into(), caller);
        self
    }
}

#[async_trait]
impl TokenValidator for MockTokenValidator {
    async fn validate(&self, token: &str) -> Result<Caller, AuthError> {
        self.callers
            .get(token)
            .copied()
            .ok_or(AuthError::InvalidToken)
    }
}
