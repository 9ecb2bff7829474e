//! Flushes scheduled notifications whose delivery time has arrived.

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::handlers::notification::{EmailOutcome, Notifier};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::NotificationRepository;

use super::RecurringJob;

/// Sends the email for notifications with `scheduled_for <= now` that have
/// not been emailed yet. Transient failures stay unsent and retry next
/// tick; undeliverable recipients are settled so the due set shrinks.
pub struct ScheduledFlushJob {
    notifications: Arc<dyn NotificationRepository>,
    notifier: Arc<Notifier>,
}

impl ScheduledFlushJob {
    pub fn new(notifications: Arc<dyn NotificationRepository>, notifier: Arc<Notifier>) -> Self {
        Self {
            notifications,
            notifier,
        }
    }
}

#[async_trait]
impl RecurringJob for ScheduledFlushJob {
    fn name(&self) -> &'static str {
        "scheduled_flush"
    }

    async fn run_once(&self, now: Timestamp) -> Result<(), DomainError> {
        let due = self.notifications.find_due_unsent(now).await?;
        let count = due.len();
        for mut notification in due {
            match self.notifier.send_email_for(&notification).await {
                EmailOutcome::Sent => {
                    notification.mark_email_sent(now);
                    self.notifications.update(&notification).await?;
                }
                EmailOutcome::Undeliverable => {
                    notification.mark_email_skipped();
                    self.notifications.update(&notification).await?;
                    tracing::debug!(
                        notification_id = %notification.id(),
                        "recipient unreachable, settled without email"
                    );
                }
                EmailOutcome::Failed => {}
            }
        }
        if count > 0 {
            tracing::debug!(count, "flushed scheduled notifications");
        }
        Ok(())
    }
}
