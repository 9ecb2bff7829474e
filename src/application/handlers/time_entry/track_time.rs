//! Logging and listing time entries.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::Caller;
use crate::domain::foundation::{DomainError, OkrId, UserId, ValidationError};
use crate::domain::time_entry::{TimeCategory, TimeEntry};
use crate::ports::TimeEntryRepository;

#[derive(Debug, Clone)]
pub struct LogTimeCommand {
    pub okr_id: Option<OkrId>,
    pub date: NaiveDate,
    pub hours: f64,
    pub category: TimeCategory,
    pub note: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LogTimeError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("users may only read their own time entries")]
    NotOwner,
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct LogTimeHandler {
    entries: Arc<dyn TimeEntryRepository>,
}

impl LogTimeHandler {
    pub fn new(entries: Arc<dyn TimeEntryRepository>) -> Self {
        Self { entries }
    }

    /// Entries are always logged against the caller; there is no logging
    /// on someone else's behalf.
    pub async fn handle(&self, caller: Caller, cmd: LogTimeCommand) -> Result<TimeEntry, LogTimeError> {
        let entry = TimeEntry::new(
            caller.user_id,
            cmd.okr_id,
            cmd.date,
            cmd.hours,
            cmd.category,
            cmd.note,
        )?;
        self.entries.save(&entry).await?;
        Ok(entry)
    }
}

pub struct ListTimeEntriesHandler {
    entries: Arc<dyn TimeEntryRepository>,
}

impl ListTimeEntriesHandler {
    pub fn new(entries: Arc<dyn TimeEntryRepository>) -> Self {
        Self { entries }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        user_id: UserId,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<TimeEntry>, LogTimeError> {
        if user_id != caller.user_id && !caller.is_hr_or_admin() {
            return Err(LogTimeError::NotOwner);
        }
        Ok(self.entries.find_for_user(user_id, from, to).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Role;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockTimeEntries {
        items: Mutex<Vec<TimeEntry>>,
    }

    impl MockTimeEntries {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                items: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TimeEntryRepository for MockTimeEntries {
        async fn save(&self, entry: &TimeEntry) -> Result<(), DomainError> {
            self.items.lock().unwrap().push(entry.clone());
            Ok(())
        }

        async fn find_for_user(
            &self,
            user_id: UserId,
            from: Option<NaiveDate>,
            to: Option<NaiveDate>,
        ) -> Result<Vec<TimeEntry>, DomainError> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.user_id() == user_id)
                .filter(|e| from.map_or(true, |d| e.date() >= d))
                .filter(|e| to.map_or(true, |d| e.date() <= d))
                .cloned()
                .collect())
        }
    }

    fn cmd(hours: f64) -> LogTimeCommand {
        LogTimeCommand {
            okr_id: None,
            date: NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
            hours,
            category: TimeCategory::ProjectWork,
            note: Some("pairing session".to_string()),
        }
    }

    #[tokio::test]
    async fn logs_against_the_caller() {
        let repo = MockTimeEntries::new();
        let handler = LogTimeHandler::new(repo.clone());

        let me = UserId::new();
        let caller = Caller::new(me, Role::Employee);
        let entry = handler.handle(caller, cmd(6.5)).await.unwrap();
        assert_eq!(entry.user_id(), me);
        assert_eq!(repo.items.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn invalid_hours_are_rejected() {
        let handler = LogTimeHandler::new(MockTimeEntries::new());
        let caller = Caller::new(UserId::new(), Role::Employee);
        let result = handler.handle(caller, cmd(25.0)).await;
        assert!(matches!(result, Err(LogTimeError::Validation(_))));
    }

    #[tokio::test]
    async fn listing_another_users_entries_requires_hr() {
        let repo = MockTimeEntries::new();
        let me = UserId::new();
        let other = UserId::new();
        LogTimeHandler::new(repo.clone())
            .handle(Caller::new(other, Role::Employee), cmd(3.0))
            .await
            .unwrap();

        let listing = ListTimeEntriesHandler::new(repo.clone());
        let denied = listing
            .handle(Caller::new(me, Role::Employee), other, None, None)
            .await;
        assert!(matches!(denied, Err(LogTimeError::NotOwner)));

        let allowed = listing
            .handle(Caller::new(me, Role::Hr), other, None, None)
            .await
            .unwrap();
        assert_eq!(allowed.len(), 1);
    }
}
