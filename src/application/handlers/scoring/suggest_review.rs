//! SuggestReviewHandler - drafts review text through the AI provider chain.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::foundation::{DomainError, SubmissionId, Timestamp};
use crate::domain::review_submission::{AiSuggestion, ReviewSubmission};
use crate::ports::{AiError, AiProvider, AiRequest, SubmissionRepository};

const SUGGESTION_MAX_TOKENS: u32 = 600;
const SUGGESTION_TEMPERATURE: f32 = 0.7;

#[derive(Debug, thiserror::Error)]
pub enum SuggestReviewError {
    #[error("submission not found: {0}")]
    NotFound(SubmissionId),
    #[error("only the reviewer may request a suggestion")]
    NotReviewer,
    /// Both providers failed. Surfaces as 503 AI_UNAVAILABLE, never a 500.
    #[error("AI providers unavailable")]
    AiUnavailable(#[source] AiError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct SuggestReviewHandler {
    submissions: Arc<dyn SubmissionRepository>,
    ai: Arc<dyn AiProvider>,
}

impl SuggestReviewHandler {
    pub fn new(submissions: Arc<dyn SubmissionRepository>, ai: Arc<dyn AiProvider>) -> Self {
        Self { submissions, ai }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        submission_id: SubmissionId,
    ) -> Result<ReviewSubmission, SuggestReviewError> {
        let mut submission = self
            .submissions
            .find_by_id(submission_id)
            .await?
            .ok_or(SuggestReviewError::NotFound(submission_id))?;
        if caller.user_id != submission.reviewer_id() {
            return Err(SuggestReviewError::NotReviewer);
        }

        let completion = self
            .ai
            .complete(build_request(&submission))
            .await
            .map_err(|err| {
                tracing::warn!(submission_id = %submission_id, error = %err, "AI suggestion failed");
                SuggestReviewError::AiUnavailable(err)
            })?;

        submission.attach_suggestion(AiSuggestion {
            text: completion.content,
            provider: completion.provider,
            generated_at: Timestamp::now(),
        });
        self.submissions.update(&submission).await?;
        Ok(submission)
    }
}

fn build_request(submission: &ReviewSubmission) -> AiRequest {
    let mut prompt = format!(
        "Draft a balanced {} performance review. Address each question below \
         in one or two paragraphs, professional in tone and specific where the \
         notes allow.\n",
        submission.review_type()
    );
    for response in submission.responses() {
        prompt.push_str("\nQuestion: ");
        prompt.push_str(&response.question);
        if !response.answer.trim().is_empty() {
            prompt.push_str("\nReviewer notes so far: ");
            prompt.push_str(&response.answer);
        }
    }
    AiRequest::new(prompt)
        .with_system_prompt(
            "You are an HR writing assistant. Suggest review wording; never invent \
             facts about the employee.",
        )
        .with_max_tokens(SUGGESTION_MAX_TOKENS)
        .with_temperature(SUGGESTION_TEMPERATURE)
}
