//! Cycle read handlers: get by id and paginated list.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::authorization::{authorize, Action, Resource};
use crate::domain::foundation::{CycleId, DomainError};
use crate::domain::review_cycle::{CycleStatus, ReviewCycle};
use crate::ports::CycleRepository;

#[derive(Debug, thiserror::Error)]
pub enum CycleQueryError {
    #[error("cycle not found: {0}")]
    NotFound(CycleId),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct GetCycleHandler {
    cycles: Arc<dyn CycleRepository>,
}

impl GetCycleHandler {
    pub fn new(cycles: Arc<dyn CycleRepository>) -> Self {
        Self { cycles }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        cycle_id: CycleId,
    ) -> Result<ReviewCycle, CycleQueryError> {
        authorize(caller.role, Resource::ReviewCycle, Action::Read)?;
        self.cycles
            .find_by_id(cycle_id)
            .await?
            .ok_or(CycleQueryError::NotFound(cycle_id))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListCyclesQuery {
    pub status: Option<CycleStatus>,
    pub page: u32,
    pub limit: u32,
}

pub struct ListCyclesHandler {
    cycles: Arc<dyn CycleRepository>,
}

impl ListCyclesHandler {
    pub fn new(cycles: Arc<dyn CycleRepository>) -> Self {
        Self { cycles }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        query: ListCyclesQuery,
    ) -> Result<Vec<ReviewCycle>, CycleQueryError> {
        authorize(caller.role, Resource::ReviewCycle, Action::Read)?;
        let page = query.page.max(1);
        let limit = query.limit.clamp(1, 100);
        Ok(self.cycles.list(query.status, page, limit).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::review_cycle::test_support::MockCycleRepo;
    use crate::domain::foundation::{Role, Timestamp, UserId};
    use crate::domain::review_cycle::{CycleSettings, CycleType};

    fn cycle() -> ReviewCycle {
        ReviewCycle::new(
            "Q3 2026",
            CycleType::Quarterly,
            Timestamp::now().plus_days(10),
            Timestamp::now().plus_days(40),
            false,
            CycleSettings::default(),
            UserId::new(),
        )
        .unwrap()
    }

    fn employee() -> Caller {
        Caller::new(UserId::new(), Role::Employee)
    }

    #[tokio::test]
    async fn get_returns_cycle() {
        let c = cycle();
        let id = c.id();
        let repo = MockCycleRepo::with(vec![c]);
        let handler = GetCycleHandler::new(repo);

        let found = handler.handle(employee(), id).await.unwrap();
        assert_eq!(found.id(), id);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let repo = MockCycleRepo::with(vec![]);
        let handler = GetCycleHandler::new(repo);

        let result = handler.handle(employee(), CycleId::new()).await;
        assert!(matches!(result, Err(CycleQueryError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let mut active = cycle();
        active.transition(CycleStatus::Active).unwrap();
        let repo = MockCycleRepo::with(vec![cycle(), active]);
        let handler = ListCyclesHandler::new(repo);

        let items = handler
            .handle(
                employee(),
                ListCyclesQuery {
                    status: Some(CycleStatus::Active),
                    page: 1,
                    limit: 20,
                },
            )
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].status(), CycleStatus::Active);
    }
}
