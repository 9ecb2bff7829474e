//! AI scoring and review-draft suggestion handlers.

mod generate_score;
mod suggest_review;

pub use generate_score::{GenerateScoreError, GenerateScoreHandler};
pub use suggest_review::{SuggestReviewError, SuggestReviewHandler};
