//! Analytics reader port (read side).
//!
//! Aggregation queries that cut across aggregates live behind this port so
//! the application layer stays free of SQL.

use async_trait::async_trait;

use crate::domain::analytics::{FeedbackTrendPoint, TeamPerformance, TrendRange};
use crate::domain::foundation::{DomainError, TeamId};

/// Read port for aggregated analytics queries.
#[async_trait]
pub trait AnalyticsReader: Send + Sync {
    /// Per-team performance rollups. `team` restricts to one team
    /// (managers see only their own).
    async fn team_performance(
        &self,
        team: Option<TeamId>,
    ) -> Result<Vec<TeamPerformance>, DomainError>;

    /// Monthly feedback buckets over a range.
    async fn feedback_trends(
        &self,
        range: TrendRange,
    ) -> Result<Vec<FeedbackTrendPoint>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytics_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn AnalyticsReader) {}
    }
}
