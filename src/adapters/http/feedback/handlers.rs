//! HTTP handlers for the continuous feedback endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::feedback::{
    CreateFeedbackCommand, CreateFeedbackHandler, ListFeedbackHandler, ListFeedbackQuery,
    ModerateFeedbackHandler,
};
use crate::application::handlers::notification::Notifier;
use crate::domain::foundation::{FeedbackId, RatingValue, UserId};
use crate::ports::{AiProvider, FeedbackRepository, UserRepository};

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::dto::{
    CreateFeedbackRequest, FeedbackResponse, ListFeedbackParams, ModerateFeedbackRequest,
};

#[derive(Clone)]
pub struct FeedbackAppState {
    pub feedback: Arc<dyn FeedbackRepository>,
    pub users: Arc<dyn UserRepository>,
    pub ai: Arc<dyn AiProvider>,
    pub notifier: Arc<Notifier>,
}

impl FeedbackAppState {
    fn create_handler(&self) -> CreateFeedbackHandler {
        CreateFeedbackHandler::new(self.feedback.clone(), self.ai.clone(), self.notifier.clone())
    }

    fn moderate_handler(&self) -> ModerateFeedbackHandler {
        ModerateFeedbackHandler::new(self.feedback.clone())
    }

    fn list_handler(&self) -> ListFeedbackHandler {
        ListFeedbackHandler::new(self.feedback.clone(), self.users.clone())
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid user ID format"))
}

/// POST /api/feedback
pub async fn create_feedback(
    State(state): State<FeedbackAppState>,
    RequireAuth(caller): RequireAuth,
    Json(request): Json<CreateFeedbackRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let rating = request.rating.map(RatingValue::new).transpose()?;
    let cmd = CreateFeedbackCommand {
        to_user: parse_user_id(&request.to_user)?,
        content: request.content,
        rating,
        category: request.category,
        tags: request.tags,
    };

    let feedback = state.create_handler().handle(caller, cmd).await?;
    Ok((StatusCode::CREATED, Json(FeedbackResponse::from(&feedback))))
}

/// GET /api/feedback
pub async fn list_feedback(
    State(state): State<FeedbackAppState>,
    RequireAuth(caller): RequireAuth,
    Query(params): Query<ListFeedbackParams>,
) -> Result<impl IntoResponse, ApiError> {
    let to_user = params.to_user.as_deref().map(parse_user_id).transpose()?;
    let from_user = params.from_user.as_deref().map(parse_user_id).transpose()?;
    let query = ListFeedbackQuery {
        to_user,
        from_user,
        page: params.page,
        limit: params.limit,
    };

    let items = state.list_handler().handle(caller, query).await?;
    let body: Vec<FeedbackResponse> = items.iter().map(FeedbackResponse::from).collect();
    Ok(Json(body))
}

/// POST /api/feedback/:id/moderate
pub async fn moderate_feedback(
    State(state): State<FeedbackAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
    Json(request): Json<ModerateFeedbackRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let feedback_id: FeedbackId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid feedback ID format"))?;
    let feedback = state
        .moderate_handler()
        .handle(caller, feedback_id, request.status)
        .await?;
    Ok(Json(FeedbackResponse::from(&feedback)))
}
