//! Organization repository port for departments and teams.

use async_trait::async_trait;

use crate::domain::foundation::{DepartmentId, DomainError, TeamId};
use crate::domain::org::{Department, Team};

/// Repository port for Department and Team reads and writes.
#[async_trait]
pub trait OrgRepository: Send + Sync {
    async fn save_department(&self, department: &Department) -> Result<(), DomainError>;

    async fn find_department(&self, id: DepartmentId)
        -> Result<Option<Department>, DomainError>;

    async fn list_departments(&self) -> Result<Vec<Department>, DomainError>;

    async fn save_team(&self, team: &Team) -> Result<(), DomainError>;

    async fn find_team(&self, id: TeamId) -> Result<Option<Team>, DomainError>;

    async fn list_teams(&self) -> Result<Vec<Team>, DomainError>;
}
