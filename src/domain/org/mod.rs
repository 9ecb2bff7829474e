//! Organizational groupings: departments and the teams inside them.

mod groups;

pub use groups::{Department, Team};
