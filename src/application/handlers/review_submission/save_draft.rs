//! SaveDraftHandler - creates or updates a reviewer's draft.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::review_submission::{DraftFields, ReviewSubmission, SubmissionKey};
use crate::ports::{CycleRepository, SubmissionRepository};

#[derive(Debug)]
pub struct SaveDraftCommand {
    pub key: SubmissionKey,
    pub fields: DraftFields,
}

#[derive(Debug, thiserror::Error)]
pub enum SaveDraftError {
    #[error("cycle not found")]
    CycleNotFound,
    #[error("cycle is not accepting submissions")]
    CycleNotAccepting,
    #[error("only the reviewer may edit this submission")]
    NotReviewer,
    #[error("{0}")]
    Frozen(#[from] crate::domain::foundation::ValidationError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct SaveDraftHandler {
    submissions: Arc<dyn SubmissionRepository>,
    cycles: Arc<dyn CycleRepository>,
}

impl SaveDraftHandler {
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
        cmd: SaveDraftCommand,
    ) -> Result<ReviewSubmission, SaveDraftError> {
        if cmd.key.reviewer_id != caller.user_id {
            return Err(SaveDraftError::NotReviewer);
        }

        let cycle = self
            .cycles
            .find_by_id(cmd.key.cycle_id)
            .await?
            .ok_or(SaveDraftError::CycleNotFound)?;
        if !cycle.status().accepts_submissions() {
            return Err(SaveDraftError::CycleNotAccepting);
        }

        match self.submissions.find_by_key(&cmd.key).await? {
            Some(mut submission) => {
                submission.apply_draft(cmd.fields)?;
                self.submissions.update(&submission).await?;
                Ok(submission)
            }
            None => {
                let mut submission = ReviewSubmission::new(cmd.key, cycle.questions());
                submission.apply_draft(cmd.fields)?;
                match self.submissions.save(&submission).await {
                    Ok(()) => Ok(submission),
                    // Lost a race against a concurrent first save; surface
                    // the conflict rather than clobbering.
                    Err(err) if err.code == ErrorCode::DuplicateSubmission => {
                        Err(SaveDraftError::Domain(err))
                    }
                    Err(err) => Err(err.into()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::review_cycle::test_support::MockCycleRepo;
    use crate::application::handlers::review_submission::test_support::MockSubmissionRepo;
    use crate::domain::foundation::{Role, Timestamp, UserId};
    use crate::domain::review_cycle::{
        CycleQuestion, CycleSettings, CycleStatus, CycleType, ReviewCycle,
    };
    use crate::domain::review_submission::ReviewType;

    fn active_cycle() -> ReviewCycle {
        let mut cycle = ReviewCycle::new(
            "Q3 2026",
            CycleType::Quarterly,
            Timestamp::now().plus_days(10),
            Timestamp::now().plus_days(40),
            false,
            CycleSettings::default(),
            UserId::new(),
        )
        .unwrap();
        cycle
            .set_questions(vec![CycleQuestion::new("What went well?").unwrap()])
            .unwrap();
        cycle.transition(CycleStatus::Active).unwrap();
        cycle
    }

    fn key(cycle: &ReviewCycle, reviewer: UserId) -> SubmissionKey {
        SubmissionKey {
            cycle_id: cycle.id(),
            reviewee_id: UserId::new(),
            reviewer_id: reviewer,
            review_type: ReviewType::Peer,
        }
    }

    fn fields() -> DraftFields {
        DraftFields {
            strengths: Some("Clear communication".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn first_save_creates_submission_with_cycle_questions() {
        let cycle = active_cycle();
        let reviewer = UserId::new();
        let cycles = MockCycleRepo::with(vec![cycle.clone()]);
        let submissions = MockSubmissionRepo::new();
        let handler = SaveDraftHandler::new(submissions.clone(), cycles);

        let caller = Caller::new(reviewer, Role::Employee);
        let saved = handler
            .handle(
                caller,
                SaveDraftCommand {
                    key: key(&cycle, reviewer),
                    fields: fields(),
                },
            )
            .await
            .unwrap();

        assert_eq!(saved.responses().len(), 1);
        assert_eq!(saved.strengths(), Some("Clear communication"));
        assert_eq!(submissions.all().len(), 1);
    }

    #[tokio::test]
    async fn second_save_updates_in_place() {
        let cycle = active_cycle();
        let reviewer = UserId::new();
        let cycles = MockCycleRepo::with(vec![cycle.clone()]);
        let submissions = MockSubmissionRepo::new();
        let handler = SaveDraftHandler::new(submissions.clone(), cycles);

        let caller = Caller::new(reviewer, Role::Employee);
        let k = key(&cycle, reviewer);
        handler
            .handle(caller, SaveDraftCommand { key: k, fields: fields() })
            .await
            .unwrap();
        let updated = handler
            .handle(
                caller,
                SaveDraftCommand {
                    key: k,
                    fields: DraftFields {
                        goals: Some("Lead the Q4 migration".to_string()),
                        ..Default::default()
                    },
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.goals(), Some("Lead the Q4 migration"));
        assert_eq!(submissions.all().len(), 1);
    }

    #[tokio::test]
    async fn only_the_reviewer_may_save() {
        let cycle = active_cycle();
        let cycles = MockCycleRepo::with(vec![cycle.clone()]);
        let handler = SaveDraftHandler::new(MockSubmissionRepo::new(), cycles);

        let caller = Caller::new(UserId::new(), Role::Employee);
        let result = handler
            .handle(
                caller,
                SaveDraftCommand {
                    key: key(&cycle, UserId::new()),
                    fields: fields(),
                },
            )
            .await;
        assert!(matches!(result, Err(SaveDraftError::NotReviewer)));
    }

    #[tokio::test]
    async fn draft_cycles_reject_submissions() {
        let mut cycle = active_cycle();
        // rebuild as draft
        cycle = ReviewCycle::reconstitute(
            cycle.id(),
            cycle.name().to_string(),
            cycle.cycle_type(),
            CycleStatus::Draft,
            cycle.start_date(),
            cycle.end_date(),
            cycle.is_emergency(),
            *cycle.settings(),
            cycle.participants().to_vec(),
            cycle.questions().to_vec(),
            cycle.created_by(),
            cycle.created_at(),
            cycle.updated_at(),
        );
        let reviewer = UserId::new();
        let cycles = MockCycleRepo::with(vec![cycle.clone()]);
        let handler = SaveDraftHandler::new(MockSubmissionRepo::new(), cycles);

        let caller = Caller::new(reviewer, Role::Employee);
        let result = handler
            .handle(
                caller,
                SaveDraftCommand {
                    key: key(&cycle, reviewer),
                    fields: fields(),
                },
            )
            .await;
        assert!(matches!(result, Err(SaveDraftError::CycleNotAccepting)));
    }

    #[tokio::test]
    async fn submitted_submissions_reject_edits() {
        let cycle = active_cycle();
        let reviewer = UserId::new();
        let k = key(&cycle, reviewer);
        let mut existing = ReviewSubmission::new(k, cycle.questions());
        existing.submit().unwrap();
        let cycles = MockCycleRepo::with(vec![cycle]);
        let submissions = MockSubmissionRepo::with(vec![existing]);
        let handler = SaveDraftHandler::new(submissions, cycles);

        let caller = Caller::new(reviewer, Role::Employee);
        let result = handler
            .handle(caller, SaveDraftCommand { key: k, fields: fields() })
            .await;
        assert!(matches!(result, Err(SaveDraftError::Frozen(_))));
    }
}
