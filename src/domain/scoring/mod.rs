//! Pure scoring logic: the weighted performance score formula and the
//! keyword-based sentiment fallback.

mod formula;
mod sentiment;

pub use formula::{calculate_ai_score, tenure_adjustment, ScoreComponents};
pub use sentiment::classify_sentiment_keywords;
