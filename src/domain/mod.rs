//! Domain layer - aggregates, value objects, and pure business rules.

pub mod analytics;
pub mod authorization;
pub mod feedback;
pub mod foundation;
pub mod notification;
pub mod okr;
pub mod org;
pub mod review_cycle;
pub mod review_submission;
pub mod review_template;
pub mod scoring;
pub mod time_entry;
pub mod user;
