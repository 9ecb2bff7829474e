//! OKR aggregate - an objective with measurable key results.

mod aggregate;

pub use aggregate::{KeyResult, Okr, OkrStatus, OkrType, ProgressSnapshot, ProgressUpdate};
