//! Notification entity with scheduling and email-delivery bookkeeping.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{NotificationId, Timestamp, UserId, ValidationError};

/// What triggered the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ReviewReminder,
    DeadlineUrgent,
    CycleActivated,
    FeedbackReceived,
    ReviewSubmitted,
    OkrProgress,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::ReviewReminder => "review_reminder",
            NotificationKind::DeadlineUrgent => "deadline_urgent",
            NotificationKind::CycleActivated => "cycle_activated",
            NotificationKind::FeedbackReceived => "feedback_received",
            NotificationKind::ReviewSubmitted => "review_submitted",
            NotificationKind::OkrProgress => "okr_progress",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "review_reminder" => Ok(NotificationKind::ReviewReminder),
            "deadline_urgent" => Ok(NotificationKind::DeadlineUrgent),
            "cycle_activated" => Ok(NotificationKind::CycleActivated),
            "feedback_received" => Ok(NotificationKind::FeedbackReceived),
            "review_submitted" => Ok(NotificationKind::ReviewSubmitted),
            "okr_progress" => Ok(NotificationKind::OkrProgress),
            other => Err(ValidationError::invalid_format(
                "notification_kind",
                format!("unknown notification kind: {}", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            other => Err(ValidationError::invalid_format(
                "priority",
                format!("unknown priority: {}", other),
            )),
        }
    }
}

/// A notification addressed to one user.
///
/// `scheduled_for` in the future means delivery is deferred to the
/// scheduled-flush job; `email_sent`/`sent_at` track email delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    id: NotificationId,
    user_id: UserId,
    kind: NotificationKind,
    title: String,
    message: String,
    priority: Priority,
    read: bool,
    scheduled_for: Option<Timestamp>,
    sent_at: Option<Timestamp>,
    email_sent: bool,
    metadata: HashMap<String, String>,
    created_at: Timestamp,
}

impl Notification {
    pub fn new(
        user_id: UserId,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        priority: Priority,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            id: NotificationId::new(),
            user_id,
            kind,
            title,
            message: message.into(),
            priority,
            read: false,
            scheduled_for: None,
            sent_at: None,
            email_sent: false,
            metadata: HashMap::new(),
            created_at: Timestamp::now(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: NotificationId,
        user_id: UserId,
        kind: NotificationKind,
        title: String,
        message: String,
        priority: Priority,
        read: bool,
        scheduled_for: Option<Timestamp>,
        sent_at: Option<Timestamp>,
        email_sent: bool,
        metadata: HashMap<String, String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            kind,
            title,
            message,
            priority,
            read,
            scheduled_for,
            sent_at,
            email_sent,
            metadata,
            created_at,
        }
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    pub fn scheduled_for(&self) -> Option<Timestamp> {
        self.scheduled_for
    }

    pub fn sent_at(&self) -> Option<Timestamp> {
        self.sent_at
    }

    pub fn email_sent(&self) -> bool {
        self.email_sent
    }

    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Defers delivery until `at`; the scheduled-flush job picks it up.
    pub fn schedule_for(mut self, at: Timestamp) -> Self {
        self.scheduled_for = Some(at);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn mark_read(&mut self) {
        self.read = true;
    }

    /// Records a successful email delivery.
    pub fn mark_email_sent(&mut self, at: Timestamp) {
        self.email_sent = true;
        self.sent_at = Some(at);
    }

    /// Settles a notification whose email cannot be delivered (recipient
    /// gone, inactive, or opted out). The in-app notification stays; the
    /// flush job stops picking it up. `sent_at` remains unset.
    pub fn mark_email_skipped(&mut self) {
        self.email_sent = true;
    }

    /// Whether the flush job should deliver this notification's email now.
    pub fn is_due(&self, now: Timestamp) -> bool {
        if self.email_sent {
            return false;
        }
        match self.scheduled_for {
            Some(at) => !at.is_after(&now),
            None => true,
        }
    }
}
