//! SubmissionStatus enum for the per-reviewer workflow.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Workflow status of a single review submission.
///
/// `draft -> submitted -> reviewed`. Once submitted the content is frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Draft,
    Submitted,
    Reviewed,
}

impl SubmissionStatus {
    /// Returns true if the reviewer may still edit content.
    pub fn is_editable(&self) -> bool {
        matches!(self, SubmissionStatus::Draft)
    }

    /// Stable string form used in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Draft => "draft",
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::Reviewed => "reviewed",
        }
    }
}

impl StateMachine for SubmissionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionStatus::*;
        matches!((self, target), (Draft, Submitted) | (Submitted, Reviewed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionStatus::*;
        match self {
            Draft => vec![Submitted],
            Submitted => vec![Reviewed],
            Reviewed => vec![],
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(SubmissionStatus::Draft),
            "submitted" => Ok(SubmissionStatus::Submitted),
            "reviewed" => Ok(SubmissionStatus::Reviewed),
            other => Err(ValidationError::invalid_format(
                "submission_status",
                format!("unknown status: {}", other),
            )),
        }
    }
}
