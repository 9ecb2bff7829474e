//! Notifications API handlers: list, mark read, mark all read.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::foundation::{DomainError, NotificationId};
use crate::domain::notification::Notification;
use crate::ports::NotificationRepository;

#[derive(Debug, thiserror::Error)]
pub enum NotificationApiError {
    #[error("notification not found: {0}")]
    NotFound(NotificationId),
    #[error("notification belongs to another user")]
    NotOwner,
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Lists the caller's notifications.
#[derive(Debug, Clone, Copy)]
pub struct ListNotificationsQuery {
    pub unread_only: bool,
    pub page: u32,
    pub limit: u32,
}

pub struct ListNotificationsHandler {
    notifications: Arc<dyn NotificationRepository>,
}

impl ListNotificationsHandler {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        query: ListNotificationsQuery,
    ) -> Result<Vec<Notification>, NotificationApiError> {
        let limit = query.limit.clamp(1, 100);
        let page = query.page.max(1);
        let items = self
            .notifications
            .find_for_user(caller.user_id, query.unread_only, page, limit)
            .await?;
        Ok(items)
    }
}

/// Marks one notification, or all of the caller's notifications, as read.
pub struct MarkReadHandler {
    notifications: Arc<dyn NotificationRepository>,
}

impl MarkReadHandler {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn mark_read(
        &self,
        caller: Caller,
        id: NotificationId,
    ) -> Result<Notification, NotificationApiError> {
        let mut notification = self
            .notifications
            .find_by_id(id)
            .await?
            .ok_or(NotificationApiError::NotFound(id))?;
        if notification.user_id() != caller.user_id {
            return Err(NotificationApiError::NotOwner);
        }
        notification.mark_read();
        self.notifications.update(&notification).await?;
        Ok(notification)
    }

    pub async fn mark_all_read(&self, caller: Caller) -> Result<u64, NotificationApiError> {
        Ok(self.notifications.mark_all_read(caller.user_id).await?)
    }
}
