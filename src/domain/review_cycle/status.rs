//! CycleStatus enum for the review cycle lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Lifecycle status of a review cycle.
///
/// Transitions are strictly one-directional and single-step:
/// `draft -> active -> grace_period -> closed`. No skipping, no reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    #[default]
    Draft,
    Active,
    GracePeriod,
    Closed,
}

impl CycleStatus {
    /// Returns true if participants may still be added.
    pub fn accepts_participants(&self) -> bool {
        matches!(self, CycleStatus::Draft | CycleStatus::Active)
    }

    /// Returns true if participants may submit reviews.
    ///
    /// Submissions are accepted while active and through the grace period.
    pub fn accepts_submissions(&self) -> bool {
        matches!(self, CycleStatus::Active | CycleStatus::GracePeriod)
    }

    /// Returns true if the cycle may be deleted.
    pub fn is_deletable(&self) -> bool {
        matches!(self, CycleStatus::Draft)
    }

    /// Stable string form used in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleStatus::Draft => "draft",
            CycleStatus::Active => "active",
            CycleStatus::GracePeriod => "grace_period",
            CycleStatus::Closed => "closed",
        }
    }
}

impl StateMachine for CycleStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use CycleStatus::*;
        matches!(
            (self, target),
            (Draft, Active) | (Active, GracePeriod) | (GracePeriod, Closed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use CycleStatus::*;
        match self {
            Draft => vec![Active],
            Active => vec![GracePeriod],
            GracePeriod => vec![Closed],
            Closed => vec![],
        }
    }
}

impl fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CycleStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(CycleStatus::Draft),
            "active" => Ok(CycleStatus::Active),
            "grace_period" => Ok(CycleStatus::GracePeriod),
            "closed" => Ok(CycleStatus::Closed),
            other => Err(ValidationError::invalid_format(
                "cycle_status",
                format!("unknown status: {}", other),
            )),
        }
    }
}
