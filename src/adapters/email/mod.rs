//! Email adapter over SMTP.

mod smtp;

pub use smtp::{SmtpEmailSender, SmtpSettings};
