//! SMTP implementation of the EmailSender port, via lettre.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{EmailMessage, EmailSender};

/// Connection settings for the SMTP relay.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

/// SMTP implementation of EmailSender.
pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpEmailSender {
    pub fn new(settings: &SmtpSettings) -> Result<Self, DomainError> {
        let from = settings.from_address.parse::<Mailbox>().map_err(|e| {
            DomainError::new(
                ErrorCode::EmailError,
                format!("Invalid from address '{}': {}", settings.from_address, e),
            )
        })?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::EmailError,
                    format!("Failed to create SMTP transport: {}", e),
                )
            })?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, message: EmailMessage) -> Result<(), DomainError> {
        let to = message.to.parse::<Mailbox>().map_err(|e| {
            DomainError::new(
                ErrorCode::EmailError,
                format!("Invalid recipient '{}': {}", message.to, e),
            )
        })?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject.as_str())
            .body(message.body)
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::EmailError,
                    format!("Failed to build email: {}", e),
                )
            })?;

        self.transport.send(email).await.map_err(|e| {
            DomainError::new(
                ErrorCode::EmailError,
                format!("Failed to send email: {}", e),
            )
        })?;

        Ok(())
    }
}
