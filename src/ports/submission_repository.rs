//! Review submission repository port.

use async_trait::async_trait;

use crate::domain::foundation::{CycleId, DomainError, SubmissionId, UserId};
use crate::domain::review_submission::{ReviewSubmission, SubmissionKey};

/// Repository port for ReviewSubmission aggregate persistence.
///
/// Implementations must enforce uniqueness of the
/// (cycle, reviewee, reviewer, review_type) tuple, surfacing violations as
/// `DuplicateSubmission`.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Save a new submission.
    ///
    /// # Errors
    ///
    /// - `DuplicateSubmission` if the tuple already exists
    async fn save(&self, submission: &ReviewSubmission) -> Result<(), DomainError>;

    /// Update an existing submission.
    async fn update(&self, submission: &ReviewSubmission) -> Result<(), DomainError>;

    /// Find by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: SubmissionId) -> Result<Option<ReviewSubmission>, DomainError>;

    /// Find by the uniqueness tuple.
    async fn find_by_key(&self, key: &SubmissionKey)
        -> Result<Option<ReviewSubmission>, DomainError>;

    /// All submissions in a cycle.
    async fn find_by_cycle(&self, cycle_id: CycleId) -> Result<Vec<ReviewSubmission>, DomainError>;

    /// All submissions where the user is the reviewer.
    async fn find_by_reviewer(
        &self,
        cycle_id: CycleId,
        reviewer_id: UserId,
    ) -> Result<Vec<ReviewSubmission>, DomainError>;

    /// All submissions about a reviewee, across cycles.
    async fn find_by_reviewee(&self, reviewee_id: UserId)
        -> Result<Vec<ReviewSubmission>, DomainError>;
}
