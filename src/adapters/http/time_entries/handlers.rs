//! HTTP handlers for the time tracking endpoints.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::time_entry::{
    ListTimeEntriesHandler, LogTimeCommand, LogTimeHandler,
};
use crate::ports::TimeEntryRepository;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::dto::{ListTimeEntriesParams, LogTimeRequest, TimeEntryResponse};

#[derive(Clone)]
pub struct TimeEntriesAppState {
    pub entries: Arc<dyn TimeEntryRepository>,
}

impl TimeEntriesAppState {
    pub fn new(entries: Arc<dyn TimeEntryRepository>) -> Self {
        Self { entries }
    }

    fn log_handler(&self) -> LogTimeHandler {
        LogTimeHandler::new(self.entries.clone())
    }

    fn list_handler(&self) -> ListTimeEntriesHandler {
        ListTimeEntriesHandler::new(self.entries.clone())
    }
}

/// POST /api/time-entries
pub async fn log_time(
    State(state): State<TimeEntriesAppState>,
    RequireAuth(caller): RequireAuth,
    Json(request): Json<LogTimeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let okr_id = request
        .okr_id
        .as_deref()
        .map(|raw| {
            raw.parse()
                .map_err(|_| ApiError::bad_request("Invalid OKR ID format"))
        })
        .transpose()?;

    let cmd = LogTimeCommand {
        okr_id,
        date: request.date,
        hours: request.hours,
        category: request.category,
        note: request.note,
    };
    let entry = state.log_handler().handle(caller, cmd).await?;
    Ok((StatusCode::CREATED, Json(TimeEntryResponse::from(&entry))))
}

/// GET /api/time-entries
pub async fn list_time_entries(
    State(state): State<TimeEntriesAppState>,
    RequireAuth(caller): RequireAuth,
    Query(params): Query<ListTimeEntriesParams>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = match params.user_id {
        Some(raw) => raw
            .parse()
            .map_err(|_| ApiError::bad_request("Invalid user ID format"))?,
        None => caller.user_id,
    };

    let entries = state
        .list_handler()
        .handle(caller, user_id, params.from, params.to)
        .await?;
    let body: Vec<TimeEntryResponse> = entries.iter().map(TimeEntryResponse::from).collect();
    Ok(Json(body))
}
