//! Time tracking entries, optionally tied to an OKR.

mod entry;

pub use entry::{TimeCategory, TimeEntry};
