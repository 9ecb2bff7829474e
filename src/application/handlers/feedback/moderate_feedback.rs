//! ModerateFeedbackHandler - HR/admin moderation of feedback entries.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::authorization::{authorize, Action, Resource};
use crate::domain::feedback::{Feedback, ModerationStatus};
use crate::domain::foundation::{DomainError, FeedbackId};
use crate::ports::FeedbackRepository;

#[derive(Debug, thiserror::Error)]
pub enum ModerateFeedbackError {
    #[error("feedback not found: {0}")]
    NotFound(FeedbackId),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct ModerateFeedbackHandler {
    feedback: Arc<dyn FeedbackRepository>,
}

impl ModerateFeedbackHandler {
    pub fn new(feedback: Arc<dyn FeedbackRepository>) -> Self {
        Self { feedback }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        id: FeedbackId,
        status: ModerationStatus,
    ) -> Result<Feedback, ModerateFeedbackError> {
        authorize(caller.role, Resource::FeedbackModeration, Action::Update)?;

        let mut feedback = self
            .feedback
            .find_by_id(id)
            .await?
            .ok_or(ModerateFeedbackError::NotFound(id))?;
        feedback.moderate(status);
        self.feedback.update(&feedback).await?;
        tracing::info!(feedback_id = %id, status = status.as_str(), "feedback moderated");
        Ok(feedback)
    }
}
