//! SubmitReviewHandler - finalizes a draft submission.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::foundation::{DomainError, SubmissionId};
use crate::domain::review_cycle::ParticipantStatus;
use crate::domain::review_submission::ReviewSubmission;
use crate::ports::{CycleRepository, SubmissionRepository};

#[derive(Debug, thiserror::Error)]
pub enum SubmitReviewError {
    #[error("submission not found: {0}")]
    NotFound(SubmissionId),
    #[error("only the reviewer may submit")]
    NotReviewer,
    #[error("{0}")]
    AlreadySubmitted(#[from] crate::domain::foundation::ValidationError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct SubmitReviewHandler {
    submissions: Arc<dyn SubmissionRepository>,
    cycles: Arc<dyn CycleRepository>,
}

impl SubmitReviewHandler {
    pub fn new(
        submissions: Arc<dyn SubmissionRepository>,
        cycles: Arc<dyn CycleRepository>,
    ) -> Self {
        Self {
            submissions,
            cycles,
        }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        submission_id: SubmissionId,
    ) -> Result<ReviewSubmission, SubmitReviewError> {
        let mut submission = self
            .submissions
            .find_by_id(submission_id)
            .await?
            .ok_or(SubmitReviewError::NotFound(submission_id))?;
        if submission.reviewer_id() != caller.user_id {
            return Err(SubmitReviewError::NotReviewer);
        }

        submission.submit()?;
        self.submissions.update(&submission).await?;

        // The participant marker is bookkeeping; a failure here must not
        // undo the submission itself.
        if let Err(err) = self.mark_participant(&submission).await {
            tracing::warn!(
                submission_id = %submission.id(),
                error = %err,
                "failed to update participant status"
            );
        }

        tracing::info!(submission_id = %submission.id(), "review submitted");
        Ok(submission)
    }

    async fn mark_participant(&self, submission: &ReviewSubmission) -> Result<(), DomainError> {
        let Some(mut cycle) = self.cycles.find_by_id(submission.cycle_id()).await? else {
            return Ok(());
        };
        if cycle
            .set_participant_status(submission.reviewer_id(), ParticipantStatus::Submitted)
            .is_ok()
        {
            self.cycles.update(&cycle).await?;
        }
        Ok(())
    }
}
