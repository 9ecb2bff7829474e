use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TeamId, Timestamp, ValidationError};

/// Per-team rollup of OKR progress and feedback ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPerformance {
    pub team_id: TeamId,
    pub team_name: String,
    pub member_count: u32,
    /// Mean key-result score across the team's active OKRs, 1-10 scale.
    pub avg_okr_score: Option<f64>,
    /// Mean feedback rating received by team members, 1-5 scale.
    pub avg_feedback_rating: Option<f64>,
}

/// One month's bucket in a feedback trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackTrendPoint {
    /// Month key in `YYYY-MM` form.
    pub month: String,
    pub count: u64,
    pub avg_rating: Option<f64>,
}

/// An inclusive date range for trend queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendRange {
    pub from: Timestamp,
    pub to: Timestamp,
}

impl TrendRange {
    pub fn new(from: Timestamp, to: Timestamp) -> Result<Self, ValidationError> {
        if !from.is_before(&to) {
            return Err(ValidationError::invalid_format(
                "range",
                "from must precede to",
            ));
        }
        Ok(Self { from, to })
    }

    /// Stable cache-key fragment for this range.
    pub fn cache_key_fragment(&self) -> String {
        format!(
            "{}:{}",
            self.from.as_datetime().format("%Y%m%d"),
            self.to.as_datetime().format("%Y%m%d")
        )
    }
}
