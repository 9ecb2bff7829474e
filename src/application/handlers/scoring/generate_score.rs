//! GenerateScoreHandler - aggregates performance signals into a weighted
//! score card on a review submission.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::foundation::{DomainError, SubmissionId, UserId};
use crate::domain::review_submission::{AiScoreCard, ReviewSubmission, ReviewType};
use crate::domain::scoring::{calculate_ai_score, tenure_adjustment, ScoreComponents};
use crate::ports::{Clock, FeedbackRepository, OkrRepository, SubmissionRepository, UserRepository};

const RECENT_FEEDBACK_WINDOW_DAYS: i64 = 90;

#[derive(Debug, thiserror::Error)]
pub enum GenerateScoreError {
    #[error("submission not found: {0}")]
    NotFound(SubmissionId),
    #[error("only the reviewer or HR may score this submission")]
    NotAllowed,
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct GenerateScoreHandler {
    submissions: Arc<dyn SubmissionRepository>,
    feedback: Arc<dyn FeedbackRepository>,
    okrs: Arc<dyn OkrRepository>,
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl GenerateScoreHandler {
    pub fn new(
        submissions: Arc<dyn SubmissionRepository>,
        feedback: Arc<dyn FeedbackRepository>,
        okrs: Arc<dyn OkrRepository>,
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            submissions,
            feedback,
            okrs,
            users,
            clock,
        }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        submission_id: SubmissionId,
    ) -> Result<ReviewSubmission, GenerateScoreError> {
        let mut submission = self
            .submissions
            .find_by_id(submission_id)
            .await?
            .ok_or(GenerateScoreError::NotFound(submission_id))?;
        if caller.user_id != submission.reviewer_id() && !caller.is_hr_or_admin() {
            return Err(GenerateScoreError::NotAllowed);
        }

        let now = self.clock.now();
        let reviewee = submission.reviewee_id();
        let components = self.collect_components(reviewee).await?;
        let final_score = calculate_ai_score(components);

        submission.attach_score(AiScoreCard {
            final_score,
            components: serde_json::to_value(components).unwrap_or(serde_json::Value::Null),
            computed_at: now,
        });
        self.submissions.update(&submission).await?;

        tracing::info!(
            submission_id = %submission_id,
            reviewee = %reviewee,
            score = final_score,
            "AI score card attached"
        );
        Ok(submission)
    }

    /// Gathers the six score components for a reviewee. Missing data leaves
    /// a component at 0, which the formula already accounts for.
    async fn collect_components(&self, reviewee: UserId) -> Result<ScoreComponents, DomainError> {
        let now = self.clock.now();

        let since = now.minus_days(RECENT_FEEDBACK_WINDOW_DAYS);
        let rated = self.feedback.find_rated_since(reviewee, since).await?;
        let ratings: Vec<f64> = rated
            .iter()
            .filter_map(|f| f.rating())
            .map(|r| r.value() as f64 * 2.0)
            .collect();
        let recent_feedback = mean(&ratings);

        let okrs = self.okrs.find_active_for_user(reviewee).await?;
        let okr_scores: Vec<f64> = okrs.iter().map(|o| o.average_score()).collect();
        let okr = mean(&okr_scores);

        let submitted = self.submissions.find_by_reviewee(reviewee).await?;
        let rating_of = |review_type: ReviewType| -> f64 {
            let values: Vec<f64> = submitted
                .iter()
                .filter(|s| !s.status().is_editable() && s.review_type() == review_type)
                .filter_map(|s| s.overall_rating())
                .map(|r| r.value() as f64 * 2.0)
                .collect();
            mean(&values)
        };

        let tenure = match self.users.find_by_id(reviewee).await? {
            Some(user) => tenure_adjustment(user.tenure_months(now)),
            None => 0.0,
        };

        Ok(ScoreComponents {
            recent_feedback,
            okr,
            peer: rating_of(ReviewType::Peer),
            manager: rating_of(ReviewType::Manager),
            self_assessment: rating_of(ReviewType::SelfReview),
            tenure_adjustment: tenure,
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
