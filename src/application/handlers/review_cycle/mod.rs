//! Review cycle lifecycle handlers.

mod create_cycle;
#[cfg(test)]
pub(crate) mod test_support;
mod delete_cycle;
mod manage_participants;
mod queries;
mod transition_cycle;

pub use create_cycle::{CreateCycleCommand, CreateCycleError, CreateCycleHandler};
pub use delete_cycle::{DeleteCycleError, DeleteCycleHandler};
pub use manage_participants::{
    AddParticipantsCommand, AddParticipantsError, AddParticipantsHandler, ParticipantEntry,
};
pub use queries::{CycleQueryError, GetCycleHandler, ListCyclesHandler, ListCyclesQuery};
pub use transition_cycle::{TransitionCycleError, TransitionCycleHandler};
