//! Department and team read handlers.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::authorization::{authorize, Action, Resource};
use crate::domain::foundation::DomainError;
use crate::domain::org::{Department, Team};
use crate::ports::OrgRepository;

#[derive(Debug, thiserror::Error)]
pub enum OrgQueryError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct ListDepartmentsHandler {
    org: Arc<dyn OrgRepository>,
}

impl ListDepartmentsHandler {
    pub fn new(org: Arc<dyn OrgRepository>) -> Self {
        Self { org }
    }

    pub async fn handle(&self, caller: Caller) -> Result<Vec<Department>, OrgQueryError> {
        authorize(caller.role, Resource::OrgUnit, Action::Read)?;
        Ok(self.org.list_departments().await?)
    }
}

pub struct ListTeamsHandler {
    org: Arc<dyn OrgRepository>,
}

impl ListTeamsHandler {
    pub fn new(org: Arc<dyn OrgRepository>) -> Self {
        Self { org }
    }

    pub async fn handle(&self, caller: Caller) -> Result<Vec<Team>, OrgQueryError> {
        authorize(caller.role, Resource::OrgUnit, Action::Read)?;
        Ok(self.org.list_teams().await?)
    }
}
