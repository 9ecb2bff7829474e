//! JSON types for the notification endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::notification::{Notification, NotificationKind, Priority};

use super::super::cycles::dto::{default_limit, default_page};

#[derive(Debug, Clone, Deserialize)]
pub struct ListNotificationsParams {
    #[serde(default)]
    pub unread_only: bool,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub priority: Priority,
    pub read: bool,
    pub scheduled_for: Option<String>,
    pub sent_at: Option<String>,
    pub email_sent: bool,
    pub metadata: HashMap<String, String>,
    pub created_at: String,
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id().to_string(),
            kind: notification.kind(),
            title: notification.title().to_string(),
            message: notification.message().to_string(),
            priority: notification.priority(),
            read: notification.is_read(),
            scheduled_for: notification.scheduled_for().map(|t| t.to_rfc3339()),
            sent_at: notification.sent_at().map(|t| t.to_rfc3339()),
            email_sent: notification.email_sent(),
            metadata: notification.metadata().clone(),
            created_at: notification.created_at().to_rfc3339(),
        }
    }
}

/// Response for the mark-all-read action.
#[derive(Debug, Clone, Serialize)]
pub struct MarkAllReadResponse {
    pub updated: u64,
}
