//! Shared mock OKR repository.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::{DomainError, OkrId, UserId};
use crate::domain::okr::{Okr, OkrStatus};
use crate::ports::{OkrFilter, OkrRepository};

pub struct MockOkrRepo {
    items: Mutex<Vec<Okr>>,
}

impl MockOkrRepo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            items: Mutex::new(Vec::new()),
        })
    }

    pub fn with(items: Vec<Okr>) -> Arc<Self> {
        Arc::new(Self {
            items: Mutex::new(items),
        })
    }

    pub fn all(&self) -> Vec<Okr> {
        self.items.lock().unwrap().clone()
    }
}

#[async_trait]
impl OkrRepository for MockOkrRepo {
    async fn save(&self, okr: &Okr) -> Result<(), DomainError> {
        self.items.lock().unwrap().push(okr.clone());
        Ok(())
    }

    async fn update(&self, okr: &Okr) -> Result<(), DomainError> {
        let mut items = self.items.lock().unwrap();
        if let Some(slot) = items.iter_mut().find(|o| o.id() == okr.id()) {
            *slot = okr.clone();
        }
        Ok(())
    }

    async fn find_by_id(&self, id: OkrId) -> Result<Option<Okr>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id() == id)
            .cloned())
    }

    async fn list(
        &self,
        filter: OkrFilter,
        _page: u32,
        _limit: u32,
    ) -> Result<Vec<Okr>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|o| filter.okr_type.map_or(true, |t| o.okr_type() == t))
            .filter(|o| filter.status.map_or(true, |s| o.status() == s))
            .filter(|o| filter.assigned_to.map_or(true, |u| o.assigned_to() == u))
            .cloned()
            .collect())
    }

    async fn find_active_for_user(&self, user_id: UserId) -> Result<Vec<Okr>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.assigned_to() == user_id && o.status() == OkrStatus::Active)
            .cloned()
            .collect())
    }
}
