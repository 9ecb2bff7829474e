//! Recording notification repository with a working dedupe guard, plus
//! the stubs needed to assemble a Notifier in job tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::application::handlers::notification::Notifier;
use crate::domain::foundation::{CycleId, DomainError, NotificationId, TeamId, Timestamp, UserId};
use crate::domain::notification::{Notification, NotificationKind};
use crate::domain::user::User;
use crate::ports::{EmailMessage, EmailSender, NotificationRepository, UserRepository};

pub struct RecordingNotifications {
    items: Mutex<Vec<Notification>>,
}

impl RecordingNotifications {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            items: Mutex::new(Vec::new()),
        })
    }

    pub fn all(&self) -> Vec<Notification> {
        self.items.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationRepository for RecordingNotifications {
    async fn save(&self, notification: &Notification) -> Result<(), DomainError> {
        self.items.lock().unwrap().push(notification.clone());
        Ok(())
    }

    async fn update(&self, notification: &Notification) -> Result<(), DomainError> {
        let mut items = self.items.lock().unwrap();
        if let Some(slot) = items.iter_mut().find(|n| n.id() == notification.id()) {
            *slot = notification.clone();
        }
        Ok(())
    }

    async fn find_by_id(&self, id: NotificationId) -> Result<Option<Notification>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id() == id)
            .cloned())
    }

    async fn find_for_user(
        &self,
        user_id: UserId,
        unread_only: bool,
        _page: u32,
        _limit: u32,
    ) -> Result<Vec<Notification>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id() == user_id)
            .filter(|n| !unread_only || !n.is_read())
            .cloned()
            .collect())
    }

    async fn mark_all_read(&self, user_id: UserId) -> Result<u64, DomainError> {
        let mut items = self.items.lock().unwrap();
        let mut changed = 0;
        for n in items.iter_mut().filter(|n| n.user_id() == user_id) {
            if !n.is_read() {
                n.mark_read();
                changed += 1;
            }
        }
        Ok(changed)
    }

    async fn exists_since(
        &self,
        user_id: UserId,
        kind: NotificationKind,
        cycle_id: CycleId,
        since: Timestamp,
    ) -> Result<bool, DomainError> {
        let cycle = cycle_id.to_string();
        Ok(self.items.lock().unwrap().iter().any(|n| {
            n.user_id() == user_id
                && n.kind() == kind
                && n.metadata().get("cycle_id") == Some(&cycle)
                && !n.created_at().is_before(&since)
        }))
    }

    async fn find_due_unsent(&self, now: Timestamp) -> Result<Vec<Notification>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.is_due(now))
            .cloned()
            .collect())
    }
}

pub struct StubUsers {
    pub user: Option<User>,
}

#[async_trait]
impl UserRepository for StubUsers {
    async fn save(&self, _user: &User) -> Result<(), DomainError> {
        Ok(())
    }
    async fn update(&self, _user: &User) -> Result<(), DomainError> {
        Ok(())
    }
    async fn find_by_id(&self, _id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.user.clone())
    }
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, DomainError> {
        Ok(None)
    }
    async fn find_by_team(&self, _team_id: TeamId) -> Result<Vec<User>, DomainError> {
        Ok(vec![])
    }
    async fn find_reports(&self, _manager_id: UserId) -> Result<Vec<User>, DomainError> {
        Ok(vec![])
    }
}

pub struct RecordingEmail {
    pub sent: Mutex<Vec<EmailMessage>>,
    fail: bool,
}

impl RecordingEmail {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmail {
    async fn send(&self, message: EmailMessage) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::new(
                crate::domain::foundation::ErrorCode::EmailError,
                "smtp down",
            ));
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

pub fn notifier(
    notifications: Arc<RecordingNotifications>,
    user: Option<User>,
    email: Arc<RecordingEmail>,
) -> Arc<Notifier> {
    Arc::new(Notifier::new(
        notifications,
        Arc::new(StubUsers { user }),
        email,
    ))
}
