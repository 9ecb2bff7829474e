//! Shared mock repository for cycle handler tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::{CycleId, DomainError};
use crate::domain::review_cycle::{CycleStatus, ReviewCycle};
use crate::ports::CycleRepository;

pub struct MockCycleRepo {
    items: Mutex<Vec<ReviewCycle>>,
}

impl MockCycleRepo {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    pub fn with(cycles: Vec<ReviewCycle>) -> Arc<Self> {
        Arc::new(Self {
            items: Mutex::new(cycles),
        })
    }

    pub fn saved(&self) -> Vec<ReviewCycle> {
        self.items.lock().unwrap().clone()
    }

    /// Panics if the cycle is missing; test helper only.
    pub fn find_by_id_sync(&self, id: CycleId) -> ReviewCycle {
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == id)
            .cloned()
            .unwrap()
    }
}

#[async_trait]
impl CycleRepository for MockCycleRepo {
    async fn save(&self, cycle: &ReviewCycle) -> Result<(), DomainError> {
        self.items.lock().unwrap().push(cycle.clone());
        Ok(())
    }

    async fn update(&self, cycle: &ReviewCycle) -> Result<(), DomainError> {
        let mut items = self.items.lock().unwrap();
        if let Some(slot) = items.iter_mut().find(|c| c.id() == cycle.id()) {
            *slot = cycle.clone();
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CycleId) -> Result<Option<ReviewCycle>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }

    async fn list(
        &self,
        status: Option<CycleStatus>,
        _page: u32,
        _limit: u32,
    ) -> Result<Vec<ReviewCycle>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|c| status.map_or(true, |s| c.status() == s))
            .cloned()
            .collect())
    }

    async fn find_by_status(&self, status: CycleStatus) -> Result<Vec<ReviewCycle>, DomainError> {
        self.list(Some(status), 1, 100).await
    }
}
