//! HTTP handlers for the review template endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::review_template::{
    CreateTemplateCommand, CreateTemplateHandler, DeleteTemplateHandler, GetTemplateHandler,
    ListTemplatesHandler,
};
use crate::domain::foundation::TemplateId;
use crate::ports::TemplateRepository;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::dto::{CreateTemplateRequest, ListTemplatesParams, TemplateResponse};

#[derive(Clone)]
pub struct TemplatesAppState {
    pub templates: Arc<dyn TemplateRepository>,
}

impl TemplatesAppState {
    pub fn new(templates: Arc<dyn TemplateRepository>) -> Self {
        Self { templates }
    }

    fn create_handler(&self) -> CreateTemplateHandler {
        CreateTemplateHandler::new(self.templates.clone())
    }

    fn delete_handler(&self) -> DeleteTemplateHandler {
        DeleteTemplateHandler::new(self.templates.clone())
    }

    fn get_handler(&self) -> GetTemplateHandler {
        GetTemplateHandler::new(self.templates.clone())
    }

    fn list_handler(&self) -> ListTemplatesHandler {
        ListTemplatesHandler::new(self.templates.clone())
    }
}

fn parse_template_id(raw: &str) -> Result<TemplateId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid template ID format"))
}

/// POST /api/templates
pub async fn create_template(
    State(state): State<TemplatesAppState>,
    RequireAuth(caller): RequireAuth,
    Json(request): Json<CreateTemplateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateTemplateCommand {
        name: request.name,
        description: request.description,
        questions: request
            .questions
            .into_iter()
            .map(|q| q.into_input())
            .collect(),
    };
    let template = state.create_handler().handle(caller, cmd).await?;
    Ok((StatusCode::CREATED, Json(TemplateResponse::from(&template))))
}

/// GET /api/templates
pub async fn list_templates(
    State(state): State<TemplatesAppState>,
    RequireAuth(caller): RequireAuth,
    Query(params): Query<ListTemplatesParams>,
) -> Result<impl IntoResponse, ApiError> {
    let templates = state
        .list_handler()
        .handle(caller, params.page, params.limit)
        .await?;
    let body: Vec<TemplateResponse> = templates.iter().map(TemplateResponse::from).collect();
    Ok(Json(body))
}

/// GET /api/templates/:id
pub async fn get_template(
    State(state): State<TemplatesAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let template_id = parse_template_id(&id)?;
    let template = state.get_handler().handle(caller, template_id).await?;
    Ok(Json(TemplateResponse::from(&template)))
}

/// DELETE /api/templates/:id
pub async fn delete_template(
    State(state): State<TemplatesAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let template_id = parse_template_id(&id)?;
    state.delete_handler().handle(caller, template_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
