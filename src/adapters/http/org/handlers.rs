//! HTTP handlers for the org endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::org::{
    CreateDepartmentHandler, CreateTeamCommand, CreateTeamHandler, ListDepartmentsHandler,
    ListTeamsHandler,
};
use crate::ports::OrgRepository;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::dto::{CreateDepartmentRequest, CreateTeamRequest, DepartmentResponse, TeamResponse};

#[derive(Clone)]
pub struct OrgAppState {
    pub org: Arc<dyn OrgRepository>,
}

impl OrgAppState {
    pub fn new(org: Arc<dyn OrgRepository>) -> Self {
        Self { org }
    }

    fn create_department_handler(&self) -> CreateDepartmentHandler {
        CreateDepartmentHandler::new(self.org.clone())
    }

    fn create_team_handler(&self) -> CreateTeamHandler {
        CreateTeamHandler::new(self.org.clone())
    }

    fn list_departments_handler(&self) -> ListDepartmentsHandler {
        ListDepartmentsHandler::new(self.org.clone())
    }

    fn list_teams_handler(&self) -> ListTeamsHandler {
        ListTeamsHandler::new(self.org.clone())
    }
}

/// POST /api/org/departments
pub async fn create_department(
    State(state): State<OrgAppState>,
    RequireAuth(caller): RequireAuth,
    Json(request): Json<CreateDepartmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let department = state
        .create_department_handler()
        .handle(caller, request.name)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(DepartmentResponse::from(&department)),
    ))
}

/// GET /api/org/departments
pub async fn list_departments(
    State(state): State<OrgAppState>,
    RequireAuth(caller): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let departments = state.list_departments_handler().handle(caller).await?;
    let body: Vec<DepartmentResponse> =
        departments.iter().map(DepartmentResponse::from).collect();
    Ok(Json(body))
}

/// POST /api/org/teams
pub async fn create_team(
    State(state): State<OrgAppState>,
    RequireAuth(caller): RequireAuth,
    Json(request): Json<CreateTeamRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let department_id = request
        .department_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid department ID format"))?;
    let lead_id = request
        .lead_id
        .map(|raw| {
            raw.parse()
                .map_err(|_| ApiError::bad_request("Invalid user ID format"))
        })
        .transpose()?;

    let cmd = CreateTeamCommand {
        name: request.name,
        department_id,
        lead_id,
    };
    let team = state.create_team_handler().handle(caller, cmd).await?;
    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// GET /api/org/teams
pub async fn list_teams(
    State(state): State<OrgAppState>,
    RequireAuth(caller): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let teams = state.list_teams_handler().handle(caller).await?;
    let body: Vec<TeamResponse> = teams.iter().map(TeamResponse::from).collect();
    Ok(Json(body))
}
