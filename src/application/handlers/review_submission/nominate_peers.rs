//! NominatePeersHandler - creates peer review submissions for a reviewee.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::foundation::{CycleId, DomainError, ErrorCode, UserId};
use crate::domain::review_submission::{ReviewSubmission, ReviewType, SubmissionKey};
use crate::ports::{CycleRepository, SubmissionRepository};

#[derive(Debug, Clone)]
pub struct NominatePeersCommand {
    pub cycle_id: CycleId,
    pub reviewee_id: UserId,
    pub peer_ids: Vec<UserId>,
}

#[derive(Debug, thiserror::Error)]
pub enum NominatePeersError {
    #[error("cycle not found: {0}")]
    CycleNotFound(CycleId),
    #[error("cycle is not accepting submissions")]
    CycleNotAccepting,
    #[error("only the reviewee or HR may nominate peers")]
    NotAllowed,
    #[error("too many peer reviewers: {requested} exceeds the cycle maximum of {max}")]
    TooManyPeers { requested: usize, max: u8 },
    #[error("a reviewee cannot nominate themselves")]
    SelfNomination,
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct NominatePeersHandler {
    submissions: Arc<dyn SubmissionRepository>,
    cycles: Arc<dyn CycleRepository>,
}

impl NominatePeersHandler {
    pub fn new(
        submissions: Arc<dyn SubmissionRepository>,
        cycles: Arc<dyn CycleRepository>,
    ) -> Self {
        Self {
            submissions,
            cycles,
        }
    }

    /// Creates one peer submission per nominated reviewer, skipping tuples
    /// that already exist. Returns the submissions created by this call.
    pub async fn handle(
        &self,
        caller: Caller,
        cmd: NominatePeersCommand,
    ) -> Result<Vec<ReviewSubmission>, NominatePeersError> {
        if caller.user_id != cmd.reviewee_id && !caller.is_hr_or_admin() {
            return Err(NominatePeersError::NotAllowed);
        }
        if cmd.peer_ids.contains(&cmd.reviewee_id) {
            return Err(NominatePeersError::SelfNomination);
        }

        let cycle = self
            .cycles
            .find_by_id(cmd.cycle_id)
            .await?
            .ok_or(NominatePeersError::CycleNotFound(cmd.cycle_id))?;
        if !cycle.status().accepts_submissions() {
            return Err(NominatePeersError::CycleNotAccepting);
        }

        let max = cycle.settings().max_peer_reviewers;
        let existing = self
            .submissions
            .find_by_cycle(cmd.cycle_id)
            .await?
            .into_iter()
            .filter(|s| {
                s.reviewee_id() == cmd.reviewee_id && s.review_type() == ReviewType::Peer
            })
            .count();
        if existing + cmd.peer_ids.len() > max as usize {
            return Err(NominatePeersError::TooManyPeers {
                requested: existing + cmd.peer_ids.len(),
                max,
            });
        }

        let mut created = Vec::new();
        for peer_id in cmd.peer_ids {
            let key = SubmissionKey {
                cycle_id: cmd.cycle_id,
                reviewee_id: cmd.reviewee_id,
                reviewer_id: peer_id,
                review_type: ReviewType::Peer,
            };
            if self.submissions.find_by_key(&key).await?.is_some() {
                continue;
            }
            let submission = ReviewSubmission::new(key, cycle.questions());
            match self.submissions.save(&submission).await {
                Ok(()) => created.push(submission),
                // Concurrent nomination created the same tuple; skip it.
                Err(err) if err.code == ErrorCode::DuplicateSubmission => continue,
                Err(err) => return Err(err.into()),
            }
        }
        Ok(created)
    }
}
