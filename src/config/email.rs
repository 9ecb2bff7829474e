//! Email delivery configuration.

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::email::SmtpSettings;

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    pub smtp_host: String,

    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    #[serde(default)]
    pub smtp_username: String,

    #[serde(default)]
    pub smtp_password: String,

    /// From address for outgoing mail.
    #[serde(default = "default_from_address")]
    pub from_address: String,
}

impl EmailConfig {
    pub fn smtp_settings(&self) -> SmtpSettings {
        SmtpSettings {
            host: self.smtp_host.clone(),
            port: self.smtp_port,
            username: self.smtp_username.clone(),
            password: self.smtp_password.clone(),
            from_address: self.from_address.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.smtp_host.is_empty() {
            return Err(ValidationError::MissingRequired("email.smtp_host"));
        }
        if self.smtp_port == 0 {
            return Err(ValidationError::InvalidSmtpPort);
        }
        if !self.from_address.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        Ok(())
    }
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "noreply@perfhub.local".to_string()
}
