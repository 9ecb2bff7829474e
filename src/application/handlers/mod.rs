//! Command and query handlers, grouped by resource.

pub mod analytics;
pub mod feedback;
pub mod jobs;
pub mod notification;
pub mod okr;
pub mod org;
pub mod review_cycle;
pub mod review_submission;
pub mod review_template;
pub mod scoring;
pub mod time_entry;
