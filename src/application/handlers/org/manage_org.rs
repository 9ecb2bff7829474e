//! Department and team write handlers.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::authorization::{authorize, Action, Resource};
use crate::domain::foundation::{DepartmentId, DomainError, UserId};
use crate::domain::org::{Department, Team};
use crate::ports::OrgRepository;

#[derive(Debug, thiserror::Error)]
pub enum OrgCommandError {
    #[error("department not found: {0}")]
    DepartmentNotFound(DepartmentId),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("{0}")]
    Validation(#[from] crate::domain::foundation::ValidationError),
}

pub struct CreateDepartmentHandler {
    org: Arc<dyn OrgRepository>,
}

impl CreateDepartmentHandler {
    pub fn new(org: Arc<dyn OrgRepository>) -> Self {
        Self { org }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        name: String,
    ) -> Result<Department, OrgCommandError> {
        authorize(caller.role, Resource::OrgUnit, Action::Create)?;
        let department = Department::new(name)?;
        self.org.save_department(&department).await?;
        tracing::info!(department_id = %department.id(), name = department.name(), "department created");
        Ok(department)
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeamCommand {
    pub name: String,
    pub department_id: DepartmentId,
    pub lead_id: Option<UserId>,
}

pub struct CreateTeamHandler {
    org: Arc<dyn OrgRepository>,
}

impl CreateTeamHandler {
    pub fn new(org: Arc<dyn OrgRepository>) -> Self {
        Self { org }
    }

    /// The department must exist before a team can reference it.
    pub async fn handle(&self, caller: Caller, cmd: CreateTeamCommand) -> Result<Team, OrgCommandError> {
        authorize(caller.role, Resource::OrgUnit, Action::Create)?;

        self.org
            .find_department(cmd.department_id)
            .await?
            .ok_or(OrgCommandError::DepartmentNotFound(cmd.department_id))?;

        let team = Team::new(cmd.name, cmd.department_id, cmd.lead_id)?;
        self.org.save_team(&team).await?;
        tracing::info!(team_id = %team.id(), name = team.name(), "team created");
        Ok(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::org::test_support::MockOrgRepo;
    use crate::domain::foundation::Role;

    #[tokio::test]
    async fn hr_creates_department_and_team() {
        let repo = Arc::new(MockOrgRepo::new());
        let caller = Caller::new(UserId::new(), Role::Hr);

        let department = CreateDepartmentHandler::new(repo.clone())
            .handle(caller, "Engineering".to_string())
            .await
            .unwrap();

        let team = CreateTeamHandler::new(repo.clone())
            .handle(
                caller,
                CreateTeamCommand {
                    name: "Platform".to_string(),
                    department_id: department.id(),
                    lead_id: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(team.department_id(), department.id());
    }

    #[tokio::test]
    async fn team_requires_existing_department() {
        let repo = Arc::new(MockOrgRepo::new());
        let caller = Caller::new(UserId::new(), Role::Admin);

        let result = CreateTeamHandler::new(repo)
            .handle(
                caller,
                CreateTeamCommand {
                    name: "Platform".to_string(),
                    department_id: DepartmentId::new(),
                    lead_id: None,
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(OrgCommandError::DepartmentNotFound(_))
        ));
    }

    #[tokio::test]
    async fn employees_cannot_create_departments() {
        let repo = Arc::new(MockOrgRepo::new());
        let caller = Caller::new(UserId::new(), Role::Employee);

        let result = CreateDepartmentHandler::new(repo)
            .handle(caller, "Engineering".to_string())
            .await;
        assert!(result.is_err());
    }
}
