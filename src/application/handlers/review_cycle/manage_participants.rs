//! AddParticipantsHandler - enrolls users into a cycle.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::authorization::{authorize, Action, Resource};
use crate::domain::foundation::{CycleId, DomainError, UserId};
use crate::domain::review_cycle::{ParticipantRole, ReviewCycle};
use crate::ports::CycleRepository;

#[derive(Debug, Clone, Copy)]
pub struct ParticipantEntry {
    pub user_id: UserId,
    pub role: ParticipantRole,
}

#[derive(Debug, Clone)]
pub struct AddParticipantsCommand {
    pub cycle_id: CycleId,
    pub participants: Vec<ParticipantEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum AddParticipantsError {
    #[error("cycle not found: {0}")]
    NotFound(CycleId),
    #[error("{0}")]
    NotAccepting(#[from] crate::domain::foundation::ValidationError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct AddParticipantsHandler {
    cycles: Arc<dyn CycleRepository>,
}

impl AddParticipantsHandler {
    pub fn new(cycles: Arc<dyn CycleRepository>) -> Self {
        Self { cycles }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        cmd: AddParticipantsCommand,
    ) -> Result<ReviewCycle, AddParticipantsError> {
        authorize(caller.role, Resource::ReviewCycle, Action::Update)?;

        let mut cycle = self
            .cycles
            .find_by_id(cmd.cycle_id)
            .await?
            .ok_or(AddParticipantsError::NotFound(cmd.cycle_id))?;

        for entry in &cmd.participants {
            cycle.add_participant(entry.user_id, entry.role)?;
        }
        self.cycles.update(&cycle).await?;
        Ok(cycle)
    }
}
