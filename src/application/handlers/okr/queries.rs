//! OKR read handlers.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::authorization::{authorize, Action, Resource};
use crate::domain::foundation::{DomainError, OkrId};
use crate::domain::okr::Okr;
use crate::ports::{OkrFilter, OkrRepository};

#[derive(Debug, thiserror::Error)]
pub enum OkrQueryError {
    #[error("OKR not found: {0}")]
    NotFound(OkrId),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct GetOkrHandler {
    okrs: Arc<dyn OkrRepository>,
}

impl GetOkrHandler {
    pub fn new(okrs: Arc<dyn OkrRepository>) -> Self {
        Self { okrs }
    }

    pub async fn handle(&self, caller: Caller, id: OkrId) -> Result<Okr, OkrQueryError> {
        authorize(caller.role, Resource::Okr, Action::Read)?;
        self.okrs
            .find_by_id(id)
            .await?
            .ok_or(OkrQueryError::NotFound(id))
    }
}

pub struct ListOkrsHandler {
    okrs: Arc<dyn OkrRepository>,
}

impl ListOkrsHandler {
    pub fn new(okrs: Arc<dyn OkrRepository>) -> Self {
        Self { okrs }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        filter: OkrFilter,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Okr>, OkrQueryError> {
        authorize(caller.role, Resource::Okr, Action::Read)?;
        let page = page.max(1);
        let limit = limit.clamp(1, 100);
        Ok(self.okrs.list(filter, page, limit).await?)
    }
}
