//! Read-model types for aggregated analytics.

mod types;

pub use types::{FeedbackTrendPoint, TeamPerformance, TrendRange};
