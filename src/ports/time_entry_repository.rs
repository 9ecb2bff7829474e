//! Time entry repository port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::time_entry::TimeEntry;

/// Repository port for TimeEntry persistence.
#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    async fn save(&self, entry: &TimeEntry) -> Result<(), DomainError>;

    /// A user's entries within an inclusive date range, newest first.
    async fn find_for_user(
        &self,
        user_id: UserId,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<TimeEntry>, DomainError>;
}
