//! Submission read handlers, scoped to reviewer, reviewee, and HR.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::foundation::{CycleId, DomainError, SubmissionId};
use crate::domain::review_submission::ReviewSubmission;
use crate::ports::SubmissionRepository;

#[derive(Debug, thiserror::Error)]
pub enum SubmissionQueryError {
    #[error("submission not found: {0}")]
    NotFound(SubmissionId),
    #[error("not permitted to view this submission")]
    NotVisible,
    #[error(transparent)]
    Domain(#[from] DomainError),
}

fn can_view(caller: Caller, submission: &ReviewSubmission) -> bool {
    caller.is_hr_or_admin()
        || submission.reviewer_id() == caller.user_id
        || submission.reviewee_id() == caller.user_id
}

pub struct GetSubmissionHandler {
    submissions: Arc<dyn SubmissionRepository>,
}

impl GetSubmissionHandler {
    pub fn new(submissions: Arc<dyn SubmissionRepository>) -> Self {
        Self { submissions }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        id: SubmissionId,
    ) -> Result<ReviewSubmission, SubmissionQueryError> {
        let submission = self
            .submissions
            .find_by_id(id)
            .await?
            .ok_or(SubmissionQueryError::NotFound(id))?;
        if !can_view(caller, &submission) {
            return Err(SubmissionQueryError::NotVisible);
        }
        Ok(submission)
    }
}

pub struct ListSubmissionsHandler {
    submissions: Arc<dyn SubmissionRepository>,
}

impl ListSubmissionsHandler {
    pub fn new(submissions: Arc<dyn SubmissionRepository>) -> Self {
        Self { submissions }
    }

    /// Submissions in a cycle the caller is entitled to see. HR and admins
    /// see everything; everyone else sees their own, as reviewer or
    /// reviewee.
    pub async fn for_cycle(
        &self,
        caller: Caller,
        cycle_id: CycleId,
    ) -> Result<Vec<ReviewSubmission>, SubmissionQueryError> {
        let all = self.submissions.find_by_cycle(cycle_id).await?;
        if caller.is_hr_or_admin() {
            return Ok(all);
        }
        Ok(all
            .into_iter()
            .filter(|s| can_view(caller, s))
            .collect())
    }
}
