//! Analytics query handlers with cached read-through.

mod queries;

pub use queries::{AnalyticsError, FeedbackTrendsHandler, TeamPerformanceHandler};
