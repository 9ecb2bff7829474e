//! TransitionCycleHandler - advances a cycle one step along its lifecycle.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::authorization::{authorize, Action, Resource};
use crate::domain::foundation::{CycleId, DomainError, ErrorCode};
use crate::domain::notification::{NotificationKind, Priority};
use crate::domain::review_cycle::{CycleStatus, ReviewCycle};
use crate::ports::CycleRepository;

use crate::application::handlers::notification::Notifier;

#[derive(Debug, thiserror::Error)]
pub enum TransitionCycleError {
    #[error("cycle not found: {0}")]
    NotFound(CycleId),
    #[error("invalid transition: {0}")]
    InvalidTransition(#[from] crate::domain::foundation::ValidationError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl TransitionCycleError {
    pub fn not_found(id: CycleId) -> Self {
        Self::NotFound(id)
    }
}

pub struct TransitionCycleHandler {
    cycles: Arc<dyn CycleRepository>,
    notifier: Arc<Notifier>,
}

impl TransitionCycleHandler {
    pub fn new(cycles: Arc<dyn CycleRepository>, notifier: Arc<Notifier>) -> Self {
        Self { cycles, notifier }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        cycle_id: CycleId,
        target: CycleStatus,
    ) -> Result<ReviewCycle, TransitionCycleError> {
        authorize(caller.role, Resource::ReviewCycle, Action::Update)?;

        let mut cycle = self
            .cycles
            .find_by_id(cycle_id)
            .await?
            .ok_or(TransitionCycleError::NotFound(cycle_id))?;

        cycle.transition(target)?;
        self.cycles.update(&cycle).await?;
        tracing::info!(cycle_id = %cycle.id(), status = %cycle.status(), "cycle transitioned");

        if target == CycleStatus::Active {
            self.announce_activation(&cycle).await;
        }
        Ok(cycle)
    }

    /// Best-effort activation announcement to every participant.
    async fn announce_activation(&self, cycle: &ReviewCycle) {
        for participant in cycle.participants() {
            let result = self
                .notifier
                .notify(
                    participant.user_id,
                    NotificationKind::CycleActivated,
                    format!("{} is now active", cycle.name()),
                    format!(
                        "The review cycle \"{}\" is open for submissions until {}.",
                        cycle.name(),
                        cycle.end_date()
                    ),
                    Priority::Normal,
                )
                .await;
            if let Err(err) = result {
                tracing::warn!(
                    cycle_id = %cycle.id(),
                    error = %err,
                    "activation notification failed"
                );
            }
        }
    }
}

/// Maps transition failures onto the domain error taxonomy for HTTP.
impl From<TransitionCycleError> for DomainError {
    fn from(err: TransitionCycleError) -> Self {
        match err {
            TransitionCycleError::NotFound(id) => DomainError::new(
                ErrorCode::CycleNotFound,
                format!("cycle not found: {}", id),
            ),
            TransitionCycleError::InvalidTransition(v) => DomainError::new(
                ErrorCode::InvalidStateTransition,
                v.to_string(),
            ),
            TransitionCycleError::Domain(d) => d,
        }
    }
}
