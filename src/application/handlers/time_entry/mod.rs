//! Time tracking handlers.

mod track_time;

pub use track_time::{ListTimeEntriesHandler, LogTimeCommand, LogTimeError, LogTimeHandler};
