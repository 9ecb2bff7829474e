//! Review cycle aggregate - a time-boxed period collecting performance reviews.

mod aggregate;
mod participant;
mod status;

pub use aggregate::{CycleQuestion, CycleSettings, CycleType, ReviewCycle};
pub use participant::{Participant, ParticipantRole, ParticipantStatus};
pub use status::CycleStatus;
