//! ReviewCycle aggregate root.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    CycleId, StateMachine, Timestamp, UserId, ValidationError,
};

use super::participant::{Participant, ParticipantRole, ParticipantStatus};
use super::status::CycleStatus;

/// Minimum days between creation and start for a non-emergency cycle.
const MIN_LEAD_DAYS: i64 = 3;

/// Kind of review period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleType {
    Quarterly,
    HalfYearly,
    Annual,
    Custom,
}

impl CycleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleType::Quarterly => "quarterly",
            CycleType::HalfYearly => "half_yearly",
            CycleType::Annual => "annual",
            CycleType::Custom => "custom",
        }
    }
}

impl fmt::Display for CycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CycleType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quarterly" => Ok(CycleType::Quarterly),
            "half_yearly" => Ok(CycleType::HalfYearly),
            "annual" => Ok(CycleType::Annual),
            "custom" => Ok(CycleType::Custom),
            other => Err(ValidationError::invalid_format(
                "cycle_type",
                format!("unknown cycle type: {}", other),
            )),
        }
    }
}

/// A question participants answer during the cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleQuestion {
    pub prompt: String,
    pub category: Option<String>,
    /// Whether an answer is required before submitting.
    pub required: bool,
}

impl CycleQuestion {
    pub fn new(prompt: impl Into<String>) -> Result<Self, ValidationError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ValidationError::empty_field("prompt"));
        }
        Ok(Self {
            prompt,
            category: None,
            required: true,
        })
    }
}

/// Cycle configuration knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSettings {
    /// Extra days after end_date during which late submissions are accepted.
    pub grace_period_days: u8,
    pub min_peer_reviewers: u8,
    pub max_peer_reviewers: u8,
}

impl Default for CycleSettings {
    fn default() -> Self {
        Self {
            grace_period_days: 3,
            min_peer_reviewers: 1,
            max_peer_reviewers: 5,
        }
    }
}

/// A time-boxed review period with participants and questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewCycle {
    id: CycleId,
    name: String,
    cycle_type: CycleType,
    status: CycleStatus,
    start_date: Timestamp,
    end_date: Timestamp,
    is_emergency: bool,
    settings: CycleSettings,
    participants: Vec<Participant>,
    questions: Vec<CycleQuestion>,
    created_by: UserId,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ReviewCycle {
    /// Creates a new draft cycle.
    ///
    /// Validation:
    /// - name must be non-empty
    /// - `start_date < end_date`
    /// - unless `is_emergency`, start must be at least 3 days in the future
    pub fn new(
        name: impl Into<String>,
        cycle_type: CycleType,
        start_date: Timestamp,
        end_date: Timestamp,
        is_emergency: bool,
        settings: CycleSettings,
        created_by: UserId,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !start_date.is_before(&end_date) {
            return Err(ValidationError::invalid_format(
                "end_date",
                "end date must be after start date",
            ));
        }
        if !is_emergency {
            let lead_days = Timestamp::now().days_until(&start_date);
            if lead_days < MIN_LEAD_DAYS {
                return Err(ValidationError::invalid_format(
                    "start_date",
                    format!("cycle must start at least {} days from now", MIN_LEAD_DAYS),
                ));
            }
        }
        if settings.min_peer_reviewers > settings.max_peer_reviewers {
            return Err(ValidationError::invalid_format(
                "min_peer_reviewers",
                "min peer reviewers exceeds max",
            ));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: CycleId::new(),
            name,
            cycle_type,
            status: CycleStatus::Draft,
            start_date,
            end_date,
            is_emergency,
            settings,
            participants: Vec::new(),
            questions: Vec::new(),
            created_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuilds a cycle from persisted state. Skips creation-time validation.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CycleId,
        name: String,
        cycle_type: CycleType,
        status: CycleStatus,
        start_date: Timestamp,
        end_date: Timestamp,
        is_emergency: bool,
        settings: CycleSettings,
        participants: Vec<Participant>,
        questions: Vec<CycleQuestion>,
        created_by: UserId,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            cycle_type,
            status,
            start_date,
            end_date,
            is_emergency,
            settings,
            participants,
            questions,
            created_by,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> CycleId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cycle_type(&self) -> CycleType {
        self.cycle_type
    }

    pub fn status(&self) -> CycleStatus {
        self.status
    }

    pub fn start_date(&self) -> Timestamp {
        self.start_date
    }

    pub fn end_date(&self) -> Timestamp {
        self.end_date
    }

    pub fn is_emergency(&self) -> bool {
        self.is_emergency
    }

    pub fn settings(&self) -> &CycleSettings {
        &self.settings
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn questions(&self) -> &[CycleQuestion] {
        &self.questions
    }

    pub fn created_by(&self) -> UserId {
        self.created_by
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Advances the cycle to `target`, enforcing single-step forward moves.
    pub fn transition(&mut self, target: CycleStatus) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(target)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Enrolls a user; only permitted while draft or active.
    ///
    /// Enrolling a user who is already a participant is a no-op.
    pub fn add_participant(
        &mut self,
        user_id: UserId,
        role: ParticipantRole,
    ) -> Result<(), ValidationError> {
        if !self.status.accepts_participants() {
            return Err(ValidationError::invalid_format(
                "status",
                format!("cannot add participants while {}", self.status),
            ));
        }
        if self.participants.iter().any(|p| p.user_id == user_id) {
            return Ok(());
        }
        self.participants.push(Participant::new(user_id, role));
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Replaces the question list; draft only.
    pub fn set_questions(&mut self, questions: Vec<CycleQuestion>) -> Result<(), ValidationError> {
        if self.status != CycleStatus::Draft {
            return Err(ValidationError::invalid_format(
                "status",
                "questions can only be edited while draft",
            ));
        }
        self.questions = questions;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Updates a participant's progress marker.
    pub fn set_participant_status(
        &mut self,
        user_id: UserId,
        status: ParticipantStatus,
    ) -> Result<(), ValidationError> {
        let participant = self
            .participants
            .iter_mut()
            .find(|p| p.user_id == user_id)
            .ok_or_else(|| {
                ValidationError::invalid_format("user_id", "user is not a participant")
            })?;
        participant.status = status;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Participants who have not yet submitted.
    pub fn pending_participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.is_pending())
    }

    /// Soft-deletes the cycle by forcing it closed. Draft only.
    pub fn soft_delete(&mut self) -> Result<(), ValidationError> {
        if !self.status.is_deletable() {
            return Err(ValidationError::invalid_format(
                "status",
                format!("only draft cycles can be deleted, cycle is {}", self.status),
            ));
        }
        self.status = CycleStatus::Closed;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Whole days until the end date, measured from `now`.
    pub fn days_until_end(&self, now: Timestamp) -> i64 {
        now.days_until(&self.end_date)
    }

    /// Whole hours until the end date, measured from `now`.
    pub fn hours_until_end(&self, now: Timestamp) -> i64 {
        now.hours_until(&self.end_date)
    }
}
