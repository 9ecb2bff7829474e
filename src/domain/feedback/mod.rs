//! Continuous feedback between employees, outside of review cycles.

mod aggregate;

pub use aggregate::{Feedback, ModerationStatus, Sentiment};
