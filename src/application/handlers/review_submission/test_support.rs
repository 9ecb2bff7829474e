//! Shared mock submission repository for workflow handler tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::{CycleId, DomainError, ErrorCode, SubmissionId, UserId};
use crate::domain::review_submission::{ReviewSubmission, SubmissionKey};
use crate::ports::SubmissionRepository;

pub struct MockSubmissionRepo {
    items: Mutex<Vec<ReviewSubmission>>,
}

impl MockSubmissionRepo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            items: Mutex::new(Vec::new()),
        })
    }

    pub fn with(items: Vec<ReviewSubmission>) -> Arc<Self> {
        Arc::new(Self {
            items: Mutex::new(items),
        })
    }

    pub fn all(&self) -> Vec<ReviewSubmission> {
        self.items.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionRepository for MockSubmissionRepo {
    async fn save(&self, submission: &ReviewSubmission) -> Result<(), DomainError> {
        let mut items = self.items.lock().unwrap();
        if items.iter().any(|s| s.key() == submission.key()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateSubmission,
                "submission already exists for this tuple",
            ));
        }
        items.push(submission.clone());
        Ok(())
    }

    async fn update(&self, submission: &ReviewSubmission) -> Result<(), DomainError> {
        let mut items = self.items.lock().unwrap();
        if let Some(slot) = items.iter_mut().find(|s| s.id() == submission.id()) {
            *slot = submission.clone();
        }
        Ok(())
    }

    async fn find_by_id(&self, id: SubmissionId) -> Result<Option<ReviewSubmission>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id() == id)
            .cloned())
    }

    async fn find_by_key(
        &self,
        key: &SubmissionKey,
    ) -> Result<Option<ReviewSubmission>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.key() == key)
            .cloned())
    }

    async fn find_by_cycle(&self, cycle_id: CycleId) -> Result<Vec<ReviewSubmission>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.cycle_id() == cycle_id)
            .cloned()
            .collect())
    }

    async fn find_by_reviewer(
        &self,
        cycle_id: CycleId,
        reviewer_id: UserId,
    ) -> Result<Vec<ReviewSubmission>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.cycle_id() == cycle_id && s.reviewer_id() == reviewer_id)
            .cloned()
            .collect())
    }

    async fn find_by_reviewee(
        &self,
        reviewee_id: UserId,
    ) -> Result<Vec<ReviewSubmission>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.reviewee_id() == reviewee_id)
            .cloned()
            .collect())
    }
}
