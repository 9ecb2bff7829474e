//! JSON types for the time tracking endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::time_entry::{TimeCategory, TimeEntry};

#[derive(Debug, Clone, Deserialize)]
pub struct LogTimeRequest {
    pub okr_id: Option<String>,
    pub date: NaiveDate,
    pub hours: f64,
    pub category: TimeCategory,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListTimeEntriesParams {
    /// Defaults to the caller.
    pub user_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeEntryResponse {
    pub id: String,
    pub user_id: String,
    pub okr_id: Option<String>,
    pub date: NaiveDate,
    pub hours: f64,
    pub category: TimeCategory,
    pub note: Option<String>,
    pub created_at: String,
}

impl From<&TimeEntry> for TimeEntryResponse {
    fn from(entry: &TimeEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            user_id: entry.user_id().to_string(),
            okr_id: entry.okr_id().map(|id| id.to_string()),
            date: entry.date(),
            hours: entry.hours(),
            category: entry.category(),
            note: entry.note().map(String::from),
            created_at: entry.created_at().to_rfc3339(),
        }
    }
}
