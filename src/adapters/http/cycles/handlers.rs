//! HTTP handlers for the review cycle endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::notification::Notifier;
use crate::application::handlers::review_cycle::{
    AddParticipantsCommand, AddParticipantsHandler, CreateCycleCommand, CreateCycleHandler,
    DeleteCycleHandler, GetCycleHandler, ListCyclesHandler, ListCyclesQuery, ParticipantEntry,
    TransitionCycleHandler,
};
use crate::domain::foundation::{CycleId, Timestamp};
use crate::ports::{CycleRepository, TemplateRepository};

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::dto::{
    AddParticipantsRequest, CreateCycleRequest, CycleResponse, ListCyclesParams,
    TransitionRequest,
};

#[derive(Clone)]
pub struct CyclesAppState {
    pub cycles: Arc<dyn CycleRepository>,
    pub templates: Arc<dyn TemplateRepository>,
    pub notifier: Arc<Notifier>,
}

impl CyclesAppState {
    pub fn new(
        cycles: Arc<dyn CycleRepository>,
        templates: Arc<dyn TemplateRepository>,
        notifier: Arc<Notifier>,
    ) -> Self {
        Self {
            cycles,
            templates,
            notifier,
        }
    }

    fn create_handler(&self) -> CreateCycleHandler {
        CreateCycleHandler::new(self.cycles.clone(), self.templates.clone())
    }

    fn transition_handler(&self) -> TransitionCycleHandler {
        TransitionCycleHandler::new(self.cycles.clone(), self.notifier.clone())
    }

    fn delete_handler(&self) -> DeleteCycleHandler {
        DeleteCycleHandler::new(self.cycles.clone())
    }

    fn participants_handler(&self) -> AddParticipantsHandler {
        AddParticipantsHandler::new(self.cycles.clone())
    }

    fn get_handler(&self) -> GetCycleHandler {
        GetCycleHandler::new(self.cycles.clone())
    }

    fn list_handler(&self) -> ListCyclesHandler {
        ListCyclesHandler::new(self.cycles.clone())
    }
}

fn parse_cycle_id(raw: &str) -> Result<CycleId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid cycle ID format"))
}

/// POST /api/cycles
pub async fn create_cycle(
    State(state): State<CyclesAppState>,
    RequireAuth(caller): RequireAuth,
    Json(request): Json<CreateCycleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let questions = request
        .questions
        .into_iter()
        .map(|q| q.into_question())
        .collect::<Result<Vec<_>, _>>()?;

    let template_id = request
        .template_id
        .map(|raw| {
            raw.parse()
                .map_err(|_| ApiError::bad_request("Invalid template ID format"))
        })
        .transpose()?;

    let cmd = CreateCycleCommand {
        name: request.name,
        cycle_type: request.cycle_type,
        start_date: Timestamp::from_datetime(request.start_date),
        end_date: Timestamp::from_datetime(request.end_date),
        is_emergency: request.is_emergency,
        settings: request.settings,
        questions,
        template_id,
    };

    let cycle = state.create_handler().handle(caller, cmd).await?;
    Ok((StatusCode::CREATED, Json(CycleResponse::from(&cycle))))
}

/// GET /api/cycles
pub async fn list_cycles(
    State(state): State<CyclesAppState>,
    RequireAuth(caller): RequireAuth,
    Query(params): Query<ListCyclesParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListCyclesQuery {
        status: params.status,
        page: params.page,
        limit: params.limit,
    };
    let cycles = state.list_handler().handle(caller, query).await?;
    let body: Vec<CycleResponse> = cycles.iter().map(CycleResponse::from).collect();
    Ok(Json(body))
}

/// GET /api/cycles/:id
pub async fn get_cycle(
    State(state): State<CyclesAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cycle_id = parse_cycle_id(&id)?;
    let cycle = state.get_handler().handle(caller, cycle_id).await?;
    Ok(Json(CycleResponse::from(&cycle)))
}

/// DELETE /api/cycles/:id
pub async fn delete_cycle(
    State(state): State<CyclesAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cycle_id = parse_cycle_id(&id)?;
    state.delete_handler().handle(caller, cycle_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/cycles/:id/transition
pub async fn transition_cycle(
    State(state): State<CyclesAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
    Json(request): Json<TransitionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cycle_id = parse_cycle_id(&id)?;
    let cycle = state
        .transition_handler()
        .handle(caller, cycle_id, request.target)
        .await?;
    Ok(Json(CycleResponse::from(&cycle)))
}

/// POST /api/cycles/:id/participants
pub async fn add_participants(
    State(state): State<CyclesAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
    Json(request): Json<AddParticipantsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cycle_id = parse_cycle_id(&id)?;
    let participants = request
        .participants
        .into_iter()
        .map(|p| {
            p.user_id
                .parse()
                .map(|user_id| ParticipantEntry {
                    user_id,
                    role: p.role,
                })
                .map_err(|_| ApiError::bad_request("Invalid user ID format"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let cmd = AddParticipantsCommand {
        cycle_id,
        participants,
    };
    let cycle = state.participants_handler().handle(caller, cmd).await?;
    Ok(Json(CycleResponse::from(&cycle)))
}
