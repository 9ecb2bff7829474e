//! Email sender port.
//!
//! Delivery is best-effort everywhere it is used: callers log failures at
//! `warn` and never fail the triggering operation.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// A plain-text email.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Port for outbound email.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_sender_is_object_safe() {
        fn _accepts_dyn(_sender: &dyn EmailSender) {}
    }
}
