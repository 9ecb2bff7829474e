//! Participant sub-entity embedded in a review cycle.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// Role a participant plays inside a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    Reviewee,
    Reviewer,
}

/// Per-participant submission progress within a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantStatus {
    #[default]
    Pending,
    InProgress,
    Submitted,
}

/// A user enrolled in a review cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: UserId,
    pub role: ParticipantRole,
    pub status: ParticipantStatus,
    pub added_at: Timestamp,
}

impl Participant {
    /// Enrolls a user in the pending state.
    pub fn new(user_id: UserId, role: ParticipantRole) -> Self {
        Self {
            user_id,
            role,
            status: ParticipantStatus::Pending,
            added_at: Timestamp::now(),
        }
    }

    /// Returns true if this participant still owes a submission.
    pub fn is_pending(&self) -> bool {
        matches!(
            self.status,
            ParticipantStatus::Pending | ParticipantStatus::InProgress
        )
    }
}
