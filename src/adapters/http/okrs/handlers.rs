//! HTTP handlers for the OKR endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::okr::{
    ArchiveOkrHandler, CreateOkrCommand, CreateOkrHandler, GetOkrHandler, ListOkrsHandler,
    UpdateProgressCommand, UpdateProgressHandler,
};
use crate::domain::foundation::OkrId;
use crate::ports::{OkrFilter, OkrRepository};

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::dto::{CreateOkrRequest, ListOkrsParams, OkrResponse, ProgressRequest, ProgressResponse};

#[derive(Clone)]
pub struct OkrsAppState {
    pub okrs: Arc<dyn OkrRepository>,
}

impl OkrsAppState {
    pub fn new(okrs: Arc<dyn OkrRepository>) -> Self {
        Self { okrs }
    }

    fn create_handler(&self) -> CreateOkrHandler {
        CreateOkrHandler::new(self.okrs.clone())
    }

    fn progress_handler(&self) -> UpdateProgressHandler {
        UpdateProgressHandler::new(self.okrs.clone())
    }

    fn archive_handler(&self) -> ArchiveOkrHandler {
        ArchiveOkrHandler::new(self.okrs.clone())
    }

    fn get_handler(&self) -> GetOkrHandler {
        GetOkrHandler::new(self.okrs.clone())
    }

    fn list_handler(&self) -> ListOkrsHandler {
        ListOkrsHandler::new(self.okrs.clone())
    }
}

fn parse_okr_id(raw: &str) -> Result<OkrId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid OKR ID format"))
}

/// POST /api/okrs
pub async fn create_okr(
    State(state): State<OkrsAppState>,
    RequireAuth(caller): RequireAuth,
    Json(request): Json<CreateOkrRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let parent_okr_id = request
        .parent_okr_id
        .as_deref()
        .map(parse_okr_id)
        .transpose()?;
    let assigned_to = match request.assigned_to {
        Some(raw) => raw
            .parse()
            .map_err(|_| ApiError::bad_request("Invalid user ID format"))?,
        None => caller.user_id,
    };
    let key_results = request
        .key_results
        .into_iter()
        .map(|kr| kr.into_key_result())
        .collect::<Result<Vec<_>, _>>()?;

    let cmd = CreateOkrCommand {
        objective: request.objective,
        okr_type: request.okr_type,
        parent_okr_id,
        assigned_to,
        key_results,
    };
    let okr = state.create_handler().handle(caller, cmd).await?;
    Ok((StatusCode::CREATED, Json(OkrResponse::from(&okr))))
}

/// GET /api/okrs
pub async fn list_okrs(
    State(state): State<OkrsAppState>,
    RequireAuth(caller): RequireAuth,
    Query(params): Query<ListOkrsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let assigned_to = params
        .assigned_to
        .as_deref()
        .map(|raw| {
            raw.parse()
                .map_err(|_| ApiError::bad_request("Invalid user ID format"))
        })
        .transpose()?;
    let filter = OkrFilter {
        okr_type: params.okr_type,
        status: params.status,
        assigned_to,
    };

    let okrs = state
        .list_handler()
        .handle(caller, filter, params.page, params.limit)
        .await?;
    let body: Vec<OkrResponse> = okrs.iter().map(OkrResponse::from).collect();
    Ok(Json(body))
}

/// GET /api/okrs/:id
pub async fn get_okr(
    State(state): State<OkrsAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let okr_id = parse_okr_id(&id)?;
    let okr = state.get_handler().handle(caller, okr_id).await?;
    Ok(Json(OkrResponse::from(&okr)))
}

/// POST /api/okrs/:id/progress
pub async fn update_progress(
    State(state): State<OkrsAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
    Json(request): Json<ProgressRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateProgressCommand {
        okr_id: parse_okr_id(&id)?,
        update: request.into_update()?,
    };
    let (okr, snapshot) = state.progress_handler().handle(caller, cmd).await?;
    Ok(Json(ProgressResponse {
        okr: OkrResponse::from(&okr),
        snapshot,
    }))
}

/// POST /api/okrs/:id/archive
pub async fn archive_okr(
    State(state): State<OkrsAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let okr_id = parse_okr_id(&id)?;
    let okr = state.archive_handler().handle(caller, okr_id).await?;
    Ok(Json(OkrResponse::from(&okr)))
}
