//! Okr aggregate root with embedded key results and progress snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{KrScore, OkrId, Timestamp, UserId, ValidationError};

/// Level at which an objective is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OkrType {
    Company,
    Department,
    Team,
    Individual,
}

impl OkrType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OkrType::Company => "company",
            OkrType::Department => "department",
            OkrType::Team => "team",
            OkrType::Individual => "individual",
        }
    }
}

impl fmt::Display for OkrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OkrType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company" => Ok(OkrType::Company),
            "department" => Ok(OkrType::Department),
            "team" => Ok(OkrType::Team),
            "individual" => Ok(OkrType::Individual),
            other => Err(ValidationError::invalid_format(
                "okr_type",
                format!("unknown OKR type: {}", other),
            )),
        }
    }
}

/// Lifecycle status of an objective. Archived is the soft delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OkrStatus {
    #[default]
    Active,
    Completed,
    Archived,
}

impl OkrStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OkrStatus::Active => "active",
            OkrStatus::Completed => "completed",
            OkrStatus::Archived => "archived",
        }
    }
}

impl FromStr for OkrStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(OkrStatus::Active),
            "completed" => Ok(OkrStatus::Completed),
            "archived" => Ok(OkrStatus::Archived),
            other => Err(ValidationError::invalid_format(
                "okr_status",
                format!("unknown OKR status: {}", other),
            )),
        }
    }
}

/// A measurable sub-target of an objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyResult {
    pub title: String,
    pub target_value: f64,
    pub current_value: f64,
    pub score: KrScore,
    pub unit: Option<String>,
}

impl KeyResult {
    pub fn new(
        title: impl Into<String>,
        target_value: f64,
        unit: Option<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            title,
            target_value,
            current_value: 0.0,
            score: KrScore::default(),
            unit,
        })
    }
}

/// Audit-trail entry recorded whenever a key result's progress changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub key_result_index: usize,
    pub previous_value: f64,
    pub new_value: f64,
    pub previous_score: KrScore,
    pub new_score: KrScore,
    pub recorded_by: UserId,
    pub recorded_at: Timestamp,
}

/// A single progress mutation to apply to a key result.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ProgressUpdate {
    pub key_result_index: usize,
    pub current_value: f64,
    pub score: KrScore,
}

/// An objective with key results, forming an optional hierarchy via
/// `parent_okr_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Okr {
    id: OkrId,
    objective: String,
    okr_type: OkrType,
    status: OkrStatus,
    parent_okr_id: Option<OkrId>,
    assigned_to: UserId,
    created_by: UserId,
    key_results: Vec<KeyResult>,
    progress_snapshots: Vec<ProgressSnapshot>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Okr {
    /// Creates a new active OKR. Requires at least one key result.
    pub fn new(
        objective: impl Into<String>,
        okr_type: OkrType,
        parent_okr_id: Option<OkrId>,
        assigned_to: UserId,
        created_by: UserId,
        key_results: Vec<KeyResult>,
    ) -> Result<Self, ValidationError> {
        let objective = objective.into();
        if objective.trim().is_empty() {
            return Err(ValidationError::empty_field("objective"));
        }
        if key_results.is_empty() {
            return Err(ValidationError::empty_field("key_results"));
        }
        let now = Timestamp::now();
        Ok(Self {
            id: OkrId::new(),
            objective,
            okr_type,
            status: OkrStatus::Active,
            parent_okr_id,
            assigned_to,
            created_by,
            key_results,
            progress_snapshots: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuilds an OKR from persisted state.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: OkrId,
        objective: String,
        okr_type: OkrType,
        status: OkrStatus,
        parent_okr_id: Option<OkrId>,
        assigned_to: UserId,
        created_by: UserId,
        key_results: Vec<KeyResult>,
        progress_snapshots: Vec<ProgressSnapshot>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            objective,
            okr_type,
            status,
            parent_okr_id,
            assigned_to,
            created_by,
            key_results,
            progress_snapshots,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> OkrId {
        self.id
    }

    pub fn objective(&self) -> &str {
        &self.objective
    }

    pub fn okr_type(&self) -> OkrType {
        self.okr_type
    }

    pub fn status(&self) -> OkrStatus {
        self.status
    }

    pub fn parent_okr_id(&self) -> Option<OkrId> {
        self.parent_okr_id
    }

    pub fn assigned_to(&self) -> UserId {
        self.assigned_to
    }

    pub fn created_by(&self) -> UserId {
        self.created_by
    }

    pub fn key_results(&self) -> &[KeyResult] {
        &self.key_results
    }

    pub fn progress_snapshots(&self) -> &[ProgressSnapshot] {
        &self.progress_snapshots
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Applies a progress update to one key result and records exactly one
    /// audit snapshot of the change.
    pub fn update_progress(
        &mut self,
        update: ProgressUpdate,
        recorded_by: UserId,
    ) -> Result<ProgressSnapshot, ValidationError> {
        if self.status == OkrStatus::Archived {
            return Err(ValidationError::invalid_format(
                "status",
                "archived OKRs cannot be updated",
            ));
        }
        let kr = self
            .key_results
            .get_mut(update.key_result_index)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "key_result_index",
                    format!("no key result at index {}", update.key_result_index),
                )
            })?;

        let snapshot = ProgressSnapshot {
            key_result_index: update.key_result_index,
            previous_value: kr.current_value,
            new_value: update.current_value,
            previous_score: kr.score,
            new_score: update.score,
            recorded_by,
            recorded_at: Timestamp::now(),
        };

        kr.current_value = update.current_value;
        kr.score = update.score;
        self.progress_snapshots.push(snapshot.clone());
        self.updated_at = Timestamp::now();

        Ok(snapshot)
    }

    /// Mean key-result score, used as the OKR component of the AI score.
    pub fn average_score(&self) -> f64 {
        if self.key_results.is_empty() {
            return 0.0;
        }
        let total: u32 = self.key_results.iter().map(|kr| kr.score.value() as u32).sum();
        total as f64 / self.key_results.len() as f64
    }

    /// Marks the objective completed.
    pub fn complete(&mut self) -> Result<(), ValidationError> {
        if self.status != OkrStatus::Active {
            return Err(ValidationError::invalid_format(
                "status",
                format!("only active OKRs can be completed, OKR is {:?}", self.status),
            ));
        }
        self.status = OkrStatus::Completed;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Soft-deletes by archiving.
    pub fn archive(&mut self) {
        self.status = OkrStatus::Archived;
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn okr() -> Okr {
        Okr::new(
            "Improve onboarding conversion",
            OkrType::Team,
            None,
            UserId::new(),
            UserId::new(),
            vec![
                KeyResult::new("Activation rate to 60%", 60.0, Some("%".to_string())).unwrap(),
                KeyResult::new("Time-to-first-value under 10m", 10.0, Some("min".to_string()))
                    .unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn new_okr_is_active_with_no_snapshots() {
        let okr = okr();
        assert_eq!(okr.status(), OkrStatus::Active);
        assert!(okr.progress_snapshots().is_empty());
        assert_eq!(okr.key_results().len(), 2);
    }

    #[test]
    fn rejects_empty_objective_and_no_key_results() {
        assert!(Okr::new(
            " ",
            OkrType::Individual,
            None,
            UserId::new(),
            UserId::new(),
            vec![KeyResult::new("x", 1.0, None).unwrap()],
        )
        .is_err());

        assert!(Okr::new(
            "Objective",
            OkrType::Individual,
            None,
            UserId::new(),
            UserId::new(),
            vec![],
        )
        .is_err());
    }

    #[test]
    fn update_progress_appends_exactly_one_snapshot() {
        let mut okr = okr();
        let updater = UserId::new();
        okr.update_progress(
            ProgressUpdate {
                key_result_index: 0,
                current_value: 42.0,
                score: KrScore::new(6).unwrap(),
            },
            updater,
        )
        .unwrap();

        assert_eq!(okr.progress_snapshots().len(), 1);
        let snap = &okr.progress_snapshots()[0];
        assert_eq!(snap.previous_value, 0.0);
        assert_eq!(snap.new_value, 42.0);
        assert_eq!(snap.previous_score.value(), 1);
        assert_eq!(snap.new_score.value(), 6);
        assert_eq!(snap.recorded_by, updater);

        assert_eq!(okr.key_results()[0].current_value, 42.0);
        assert_eq!(okr.key_results()[0].score.value(), 6);
    }

    #[test]
    fn consecutive_updates_each_append_one_snapshot() {
        let mut okr = okr();
        for (i, score) in [(0usize, 4u8), (1, 7), (0, 9)] {
            okr.update_progress(
                ProgressUpdate {
                    key_result_index: i,
                    current_value: score as f64,
                    score: KrScore::new(score).unwrap(),
                },
                UserId::new(),
            )
            .unwrap();
        }
        assert_eq!(okr.progress_snapshots().len(), 3);
    }

    #[test]
    fn update_progress_rejects_bad_index() {
        let mut okr = okr();
        let result = okr.update_progress(
            ProgressUpdate {
                key_result_index: 5,
                current_value: 1.0,
                score: KrScore::new(5).unwrap(),
            },
            UserId::new(),
        );
        assert!(result.is_err());
        assert!(okr.progress_snapshots().is_empty());
    }

    #[test]
    fn archived_okr_rejects_updates() {
        let mut okr = okr();
        okr.archive();
        let result = okr.update_progress(
            ProgressUpdate {
                key_result_index: 0,
                current_value: 1.0,
                score: KrScore::new(5).unwrap(),
            },
            UserId::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn average_score_is_mean_of_key_results() {
        let mut okr = okr();
        okr.update_progress(
            ProgressUpdate {
                key_result_index: 0,
                current_value: 50.0,
                score: KrScore::new(8).unwrap(),
            },
            UserId::new(),
        )
        .unwrap();
        okr.update_progress(
            ProgressUpdate {
                key_result_index: 1,
                current_value: 12.0,
                score: KrScore::new(4).unwrap(),
            },
            UserId::new(),
        )
        .unwrap();
        assert_eq!(okr.average_score(), 6.0);
    }

    #[test]
    fn complete_only_from_active() {
        let mut okr = okr();
        okr.complete().unwrap();
        assert_eq!(okr.status(), OkrStatus::Completed);
        assert!(okr.complete().is_err());
    }

    #[test]
    fn okr_type_round_trips_through_str() {
        for t in [
            OkrType::Company,
            OkrType::Department,
            OkrType::Team,
            OkrType::Individual,
        ] {
            assert_eq!(t.as_str().parse::<OkrType>().unwrap(), t);
        }
    }
}
