//! Notifier - creates notifications and delivers email best-effort.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::notification::{Notification, NotificationKind, Priority};
use crate::ports::{EmailMessage, EmailSender, NotificationRepository, UserRepository};

/// Outcome of one email delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailOutcome {
    /// The transport accepted the message.
    Sent,
    /// The recipient is gone, inactive, or opted out; retrying cannot help.
    Undeliverable,
    /// Transient failure (user lookup or SMTP); worth retrying.
    Failed,
}

/// Creates notifications and, when the user has email notifications
/// enabled, sends the email immediately. Email failures are logged and
/// swallowed; they never fail the triggering operation.
pub struct Notifier {
    notifications: Arc<dyn NotificationRepository>,
    users: Arc<dyn UserRepository>,
    email: Arc<dyn EmailSender>,
}

impl Notifier {
    pub fn new(
        notifications: Arc<dyn NotificationRepository>,
        users: Arc<dyn UserRepository>,
        email: Arc<dyn EmailSender>,
    ) -> Self {
        Self {
            notifications,
            users,
            email,
        }
    }

    /// Persists the notification and attempts immediate email delivery
    /// unless it is scheduled for later.
    pub async fn deliver(&self, mut notification: Notification) -> Result<(), DomainError> {
        let deliver_now = notification.scheduled_for().is_none();
        if deliver_now && self.try_send_email(&notification).await == EmailOutcome::Sent {
            notification.mark_email_sent(Timestamp::now());
        }
        self.notifications.save(&notification).await
    }

    /// Convenience wrapper for simple immediate notifications.
    pub async fn notify(
        &self,
        user_id: UserId,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        priority: Priority,
    ) -> Result<(), DomainError> {
        let notification = Notification::new(user_id, kind, title, message, priority)?;
        self.deliver(notification).await
    }

    /// Sends the email for an already-persisted notification. Used by the
    /// scheduled-flush job, which settles `Undeliverable` notifications
    /// and retries `Failed` ones.
    pub async fn send_email_for(&self, notification: &Notification) -> EmailOutcome {
        self.try_send_email(notification).await
    }

    async fn try_send_email(&self, notification: &Notification) -> EmailOutcome {
        let user = match self.users.find_by_id(notification.user_id()).await {
            Ok(Some(user)) => user,
            Ok(None) => return EmailOutcome::Undeliverable,
            Err(err) => {
                tracing::warn!(
                    notification_id = %notification.id(),
                    error = %err,
                    "user lookup failed, skipping notification email"
                );
                return EmailOutcome::Failed;
            }
        };
        if !user.is_active() || !user.email_notifications() {
            return EmailOutcome::Undeliverable;
        }

        let message = EmailMessage::new(
            user.email(),
            notification.title(),
            notification.message(),
        );
        match self.email.send(message).await {
            Ok(()) => EmailOutcome::Sent,
            Err(err) => {
                tracing::warn!(
                    notification_id = %notification.id(),
                    error = %err,
                    "notification email failed"
                );
                EmailOutcome::Failed
            }
        }
    }
}
