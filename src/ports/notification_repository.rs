//! Notification repository port.

use async_trait::async_trait;

use crate::domain::foundation::{CycleId, DomainError, NotificationId, Timestamp, UserId};
use crate::domain::notification::{Notification, NotificationKind};

/// Repository port for Notification persistence.
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn save(&self, notification: &Notification) -> Result<(), DomainError>;

    async fn update(&self, notification: &Notification) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: NotificationId)
        -> Result<Option<Notification>, DomainError>;

    /// A user's notifications, newest first.
    async fn find_for_user(
        &self,
        user_id: UserId,
        unread_only: bool,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Notification>, DomainError>;

    /// Mark every unread notification for the user as read. Returns the
    /// number updated.
    async fn mark_all_read(&self, user_id: UserId) -> Result<u64, DomainError>;

    /// Whether a notification of this kind, for this user and cycle, was
    /// created on or after `since`. The scheduler's dedupe guard.
    async fn exists_since(
        &self,
        user_id: UserId,
        kind: NotificationKind,
        cycle_id: CycleId,
        since: Timestamp,
    ) -> Result<bool, DomainError>;

    /// Notifications whose scheduled delivery is due and whose email has
    /// not been sent yet.
    async fn find_due_unsent(&self, now: Timestamp) -> Result<Vec<Notification>, DomainError>;
}
