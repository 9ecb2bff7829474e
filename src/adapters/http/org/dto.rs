//! JSON request/response types for the org endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::org::{Department, Team};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub department_id: String,
    pub lead_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentResponse {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

impl From<&Department> for DepartmentResponse {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id().to_string(),
            name: department.name().to_string(),
            created_at: department.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub department_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
    pub created_at: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            name: team.name().to_string(),
            department_id: team.department_id().to_string(),
            lead_id: team.lead_id().map(|id| id.to_string()),
            created_at: team.created_at().to_rfc3339(),
        }
    }
}
