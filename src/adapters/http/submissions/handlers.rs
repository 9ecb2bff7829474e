//! HTTP handlers for the review submission endpoints, including the AI
//! suggestion and scoring actions.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::review_submission::{
    GetSubmissionHandler, ListSubmissionsHandler, NominatePeersCommand, NominatePeersHandler,
    SaveDraftCommand, SaveDraftHandler, SubmitReviewHandler,
};
use crate::application::handlers::scoring::{GenerateScoreHandler, SuggestReviewHandler};
use crate::domain::foundation::{CycleId, SubmissionId, UserId};
use crate::domain::review_submission::SubmissionKey;
use crate::ports::{
    AiProvider, Clock, CycleRepository, FeedbackRepository, OkrRepository, SubmissionRepository,
    UserRepository,
};

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::dto::{NominatePeersRequest, SaveDraftRequest, SubmissionResponse};

#[derive(Clone)]
pub struct SubmissionsAppState {
    pub submissions: Arc<dyn SubmissionRepository>,
    pub cycles: Arc<dyn CycleRepository>,
    pub feedback: Arc<dyn FeedbackRepository>,
    pub okrs: Arc<dyn OkrRepository>,
    pub users: Arc<dyn UserRepository>,
    pub ai: Arc<dyn AiProvider>,
    pub clock: Arc<dyn Clock>,
}

impl SubmissionsAppState {
    fn save_draft_handler(&self) -> SaveDraftHandler {
        SaveDraftHandler::new(self.submissions.clone(), self.cycles.clone())
    }

    fn submit_handler(&self) -> SubmitReviewHandler {
        SubmitReviewHandler::new(self.submissions.clone(), self.cycles.clone())
    }

    fn nominate_handler(&self) -> NominatePeersHandler {
        NominatePeersHandler::new(self.submissions.clone(), self.cycles.clone())
    }

    fn get_handler(&self) -> GetSubmissionHandler {
        GetSubmissionHandler::new(self.submissions.clone())
    }

    fn list_handler(&self) -> ListSubmissionsHandler {
        ListSubmissionsHandler::new(self.submissions.clone())
    }

    fn suggest_handler(&self) -> SuggestReviewHandler {
        SuggestReviewHandler::new(self.submissions.clone(), self.ai.clone())
    }

    fn score_handler(&self) -> GenerateScoreHandler {
        GenerateScoreHandler::new(
            self.submissions.clone(),
            self.feedback.clone(),
            self.okrs.clone(),
            self.users.clone(),
            self.clock.clone(),
        )
    }
}

fn parse_submission_id(raw: &str) -> Result<SubmissionId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid submission ID format"))
}

fn parse_cycle_id(raw: &str) -> Result<CycleId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid cycle ID format"))
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid user ID format"))
}

/// PUT /api/submissions/draft
///
/// The reviewer side of the key is always the caller.
pub async fn save_draft(
    State(state): State<SubmissionsAppState>,
    RequireAuth(caller): RequireAuth,
    Json(request): Json<SaveDraftRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let key = SubmissionKey {
        cycle_id: parse_cycle_id(&request.cycle_id)?,
        reviewee_id: parse_user_id(&request.reviewee_id)?,
        reviewer_id: caller.user_id,
        review_type: request.review_type,
    };
    let fields = request.draft_fields()?;

    let submission = state
        .save_draft_handler()
        .handle(caller, SaveDraftCommand { key, fields })
        .await?;
    Ok(Json(SubmissionResponse::from(&submission)))
}

/// POST /api/submissions/:id/submit
pub async fn submit_review(
    State(state): State<SubmissionsAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let submission_id = parse_submission_id(&id)?;
    let submission = state.submit_handler().handle(caller, submission_id).await?;
    Ok(Json(SubmissionResponse::from(&submission)))
}

/// POST /api/cycles/:id/nominations
pub async fn nominate_peers(
    State(state): State<SubmissionsAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
    Json(request): Json<NominatePeersRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = NominatePeersCommand {
        cycle_id: parse_cycle_id(&id)?,
        reviewee_id: parse_user_id(&request.reviewee_id)?,
        peer_ids: request
            .peer_ids
            .iter()
            .map(|raw| parse_user_id(raw))
            .collect::<Result<Vec<_>, _>>()?,
    };

    let created = state.nominate_handler().handle(caller, cmd).await?;
    let body: Vec<SubmissionResponse> = created.iter().map(SubmissionResponse::from).collect();
    Ok((StatusCode::CREATED, Json(body)))
}

/// GET /api/submissions/:id
pub async fn get_submission(
    State(state): State<SubmissionsAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let submission_id = parse_submission_id(&id)?;
    let submission = state.get_handler().handle(caller, submission_id).await?;
    Ok(Json(SubmissionResponse::from(&submission)))
}

/// GET /api/cycles/:id/submissions
pub async fn list_cycle_submissions(
    State(state): State<SubmissionsAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cycle_id = parse_cycle_id(&id)?;
    let submissions = state.list_handler().for_cycle(caller, cycle_id).await?;
    let body: Vec<SubmissionResponse> =
        submissions.iter().map(SubmissionResponse::from).collect();
    Ok(Json(body))
}

/// POST /api/submissions/:id/suggestion
pub async fn suggest_review(
    State(state): State<SubmissionsAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let submission_id = parse_submission_id(&id)?;
    let submission = state
        .suggest_handler()
        .handle(caller, submission_id)
        .await?;
    Ok(Json(SubmissionResponse::from(&submission)))
}

/// POST /api/submissions/:id/score
pub async fn generate_score(
    State(state): State<SubmissionsAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let submission_id = parse_submission_id(&id)?;
    let submission = state.score_handler().handle(caller, submission_id).await?;
    Ok(Json(SubmissionResponse::from(&submission)))
}
