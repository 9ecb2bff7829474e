//! TimeEntry entity. Hours are validated into (0, 24].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{OkrId, TimeEntryId, Timestamp, UserId, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeCategory {
    #[default]
    ProjectWork,
    Meetings,
    Learning,
    Mentoring,
    Administration,
    Other,
}

impl TimeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeCategory::ProjectWork => "project_work",
            TimeCategory::Meetings => "meetings",
            TimeCategory::Learning => "learning",
            TimeCategory::Mentoring => "mentoring",
            TimeCategory::Administration => "administration",
            TimeCategory::Other => "other",
        }
    }
}

impl fmt::Display for TimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project_work" => Ok(TimeCategory::ProjectWork),
            "meetings" => Ok(TimeCategory::Meetings),
            "learning" => Ok(TimeCategory::Learning),
            "mentoring" => Ok(TimeCategory::Mentoring),
            "administration" => Ok(TimeCategory::Administration),
            "other" => Ok(TimeCategory::Other),
            other => Err(ValidationError::invalid_format(
                "time_category",
                format!("unknown time category: {}", other),
            )),
        }
    }
}

/// One logged block of time for a user on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    id: TimeEntryId,
    user_id: UserId,
    okr_id: Option<OkrId>,
    date: NaiveDate,
    hours: f64,
    category: TimeCategory,
    note: Option<String>,
    created_at: Timestamp,
}

impl TimeEntry {
    pub fn new(
        user_id: UserId,
        okr_id: Option<OkrId>,
        date: NaiveDate,
        hours: f64,
        category: TimeCategory,
        note: Option<String>,
    ) -> Result<Self, ValidationError> {
        if !(hours > 0.0 && hours <= 24.0) {
            return Err(ValidationError::out_of_range("hours", 0.0, 24.0, hours));
        }
        Ok(Self {
            id: TimeEntryId::new(),
            user_id,
            okr_id,
            date,
            hours,
            category,
            note,
            created_at: Timestamp::now(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: TimeEntryId,
        user_id: UserId,
        okr_id: Option<OkrId>,
        date: NaiveDate,
        hours: f64,
        category: TimeCategory,
        note: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            okr_id,
            date,
            hours,
            category,
            note,
            created_at,
        }
    }

    pub fn id(&self) -> TimeEntryId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn okr_id(&self) -> Option<OkrId> {
        self.okr_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn category(&self) -> TimeCategory {
        self.category
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn accepts_hours_within_range() {
        for hours in [0.25, 8.0, 24.0] {
            let entry = TimeEntry::new(
                UserId::new(),
                None,
                date(),
                hours,
                TimeCategory::ProjectWork,
                None,
            );
            assert!(entry.is_ok(), "hours {} should be valid", hours);
        }
    }

    #[test]
    fn rejects_zero_negative_and_over_24_hours() {
        for hours in [0.0, -1.0, 24.5] {
            let entry = TimeEntry::new(
                UserId::new(),
                None,
                date(),
                hours,
                TimeCategory::Meetings,
                None,
            );
            assert!(entry.is_err(), "hours {} should be rejected", hours);
        }
    }

    proptest! {
        #[test]
        fn valid_entries_keep_hours_in_range(hours in 0.01f64..=24.0) {
            let entry = TimeEntry::new(
                UserId::new(),
                None,
                date(),
                hours,
                TimeCategory::Other,
                None,
            ).unwrap();
            prop_assert!(entry.hours() > 0.0 && entry.hours() <= 24.0);
        }
    }
}
