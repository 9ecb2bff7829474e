//! DeleteCycleHandler - soft-deletes a draft cycle.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::authorization::{authorize, Action, Resource};
use crate::domain::foundation::{CycleId, DomainError};
use crate::ports::CycleRepository;

#[derive(Debug, thiserror::Error)]
pub enum DeleteCycleError {
    #[error("cycle not found: {0}")]
    NotFound(CycleId),
    #[error("{0}")]
    NotDeletable(#[from] crate::domain::foundation::ValidationError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct DeleteCycleHandler {
    cycles: Arc<dyn CycleRepository>,
}

impl DeleteCycleHandler {
    pub fn new(cycles: Arc<dyn CycleRepository>) -> Self {
        Self { cycles }
    }

    pub async fn handle(&self, caller: Caller, cycle_id: CycleId) -> Result<(), DeleteCycleError> {
        authorize(caller.role, Resource::ReviewCycle, Action::Delete)?;

        let mut cycle = self
            .cycles
            .find_by_id(cycle_id)
            .await?
            .ok_or(DeleteCycleError::NotFound(cycle_id))?;

        cycle.soft_delete()?;
        self.cycles.update(&cycle).await?;
        tracing::info!(cycle_id = %cycle_id, "cycle soft-deleted");
        Ok(())
    }
}
