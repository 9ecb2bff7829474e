//! Review cycle repository port.

use async_trait::async_trait;

use crate::domain::foundation::{CycleId, DomainError};
use crate::domain::review_cycle::{CycleStatus, ReviewCycle};

/// Repository port for ReviewCycle aggregate persistence.
#[async_trait]
pub trait CycleRepository: Send + Sync {
    /// Save a new cycle.
    async fn save(&self, cycle: &ReviewCycle) -> Result<(), DomainError>;

    /// Update an existing cycle, including participants and questions.
    async fn update(&self, cycle: &ReviewCycle) -> Result<(), DomainError>;

    /// Find a cycle by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: CycleId) -> Result<Option<ReviewCycle>, DomainError>;

    /// List cycles, newest first, optionally filtered by status.
    async fn list(
        &self,
        status: Option<CycleStatus>,
        page: u32,
        limit: u32,
    ) -> Result<Vec<ReviewCycle>, DomainError>;

    /// All cycles currently in the given status. Used by the scheduler.
    async fn find_by_status(&self, status: CycleStatus) -> Result<Vec<ReviewCycle>, DomainError>;
}
