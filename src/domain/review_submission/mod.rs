//! Review submission aggregate - one reviewer's review of one reviewee
//! for one cycle.

mod aggregate;
mod status;

pub use aggregate::{
    AiScoreCard, AiSuggestion, DraftFields, ResponseEntry, ReviewSubmission, ReviewType,
    SubmissionKey,
};
pub use status::SubmissionStatus;
