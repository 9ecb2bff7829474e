//! In-memory org repository for handler and route tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DepartmentId, DomainError, TeamId};
use crate::domain::org::{Department, Team};
use crate::ports::OrgRepository;

#[derive(Default)]
pub(crate) struct MockOrgRepo {
    departments: Mutex<Vec<Department>>,
    teams: Mutex<Vec<Team>>,
}

impl MockOrgRepo {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrgRepository for MockOrgRepo {
    async fn save_department(&self, department: &Department) -> Result<(), DomainError> {
        self.departments.lock().unwrap().push(department.clone());
        Ok(())
    }

    async fn find_department(
        &self,
        id: DepartmentId,
    ) -> Result<Option<Department>, DomainError> {
        Ok(self
            .departments
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id() == id)
            .cloned())
    }

    async fn list_departments(&self) -> Result<Vec<Department>, DomainError> {
        Ok(self.departments.lock().unwrap().clone())
    }

    async fn save_team(&self, team: &Team) -> Result<(), DomainError> {
        self.teams.lock().unwrap().push(team.clone());
        Ok(())
    }

    async fn find_team(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        Ok(self
            .teams
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn list_teams(&self) -> Result<Vec<Team>, DomainError> {
        Ok(self.teams.lock().unwrap().clone())
    }
}
