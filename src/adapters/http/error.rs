//! Shared API error type and the JSON error envelope.
//!
//! Every resource handler returns `ApiError`; the `From` impls below
//! collapse the per-handler error enums into the five HTTP shapes the
//! API exposes.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::handlers::analytics::AnalyticsError;
use crate::application::handlers::feedback::{
    CreateFeedbackError, FeedbackQueryError, ModerateFeedbackError,
};
use crate::application::handlers::notification::NotificationApiError;
use crate::application::handlers::okr::{OkrCommandError, OkrQueryError};
use crate::application::handlers::review_cycle::{
    AddParticipantsError, CreateCycleError, CycleQueryError, DeleteCycleError,
    TransitionCycleError,
};
use crate::application::handlers::review_submission::{
    NominatePeersError, SaveDraftError, SubmissionQueryError, SubmitReviewError,
};
use crate::application::handlers::org::{OrgCommandError, OrgQueryError};
use crate::application::handlers::review_template::{CreateTemplateError, TemplateQueryError};
use crate::application::handlers::scoring::{GenerateScoreError, SuggestReviewError};
use crate::application::handlers::time_entry::LogTimeError;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Standard error envelope: `{code, message, details?}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// API error mapped onto an HTTP status and error envelope.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Forbidden(String),
    Conflict(String),
    AiUnavailable(String),
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new("BAD_REQUEST", msg))
            }
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorResponse::new("NOT_FOUND", msg))
            }
            ApiError::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, ErrorResponse::new("FORBIDDEN", msg))
            }
            ApiError::Conflict(msg) => {
                (StatusCode::CONFLICT, ErrorResponse::new("CONFLICT", msg))
            }
            ApiError::AiUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new("AI_UNAVAILABLE", msg),
            ),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "Internal server error"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        if err.is_not_found() {
            return ApiError::NotFound(err.message);
        }
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::InvalidStateTransition
            | ErrorCode::CycleNotAcceptingParticipants
            | ErrorCode::CycleNotDeletable
            | ErrorCode::SubmissionFrozen
            | ErrorCode::OkrArchived => ApiError::BadRequest(err.message),
            ErrorCode::Unauthorized | ErrorCode::Forbidden => ApiError::Forbidden(err.message),
            ErrorCode::DuplicateSubmission => ApiError::Conflict(err.message),
            ErrorCode::AiUnavailable => ApiError::AiUnavailable(err.message),
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Review cycle handlers
// ───────────────────────────────────────────────────────────────

impl From<CreateCycleError> for ApiError {
    fn from(err: CreateCycleError) -> Self {
        match err {
            CreateCycleError::TemplateNotFound(id) => {
                ApiError::NotFound(format!("Template not found: {}", id))
            }
            CreateCycleError::Validation(e) => e.into(),
            CreateCycleError::Domain(e) => e.into(),
        }
    }
}

impl From<DeleteCycleError> for ApiError {
    fn from(err: DeleteCycleError) -> Self {
        match err {
            DeleteCycleError::NotFound(id) => {
                ApiError::NotFound(format!("Cycle not found: {}", id))
            }
            DeleteCycleError::NotDeletable(e) => e.into(),
            DeleteCycleError::Domain(e) => e.into(),
        }
    }
}

impl From<AddParticipantsError> for ApiError {
    fn from(err: AddParticipantsError) -> Self {
        match err {
            AddParticipantsError::NotFound(id) => {
                ApiError::NotFound(format!("Cycle not found: {}", id))
            }
            AddParticipantsError::NotAccepting(e) => e.into(),
            AddParticipantsError::Domain(e) => e.into(),
        }
    }
}

impl From<TransitionCycleError> for ApiError {
    fn from(err: TransitionCycleError) -> Self {
        match err {
            TransitionCycleError::NotFound(id) => {
                ApiError::NotFound(format!("Cycle not found: {}", id))
            }
            TransitionCycleError::InvalidTransition(e) => e.into(),
            TransitionCycleError::Domain(e) => e.into(),
        }
    }
}

impl From<CycleQueryError> for ApiError {
    fn from(err: CycleQueryError) -> Self {
        match err {
            CycleQueryError::NotFound(id) => {
                ApiError::NotFound(format!("Cycle not found: {}", id))
            }
            CycleQueryError::Domain(e) => e.into(),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Review submission handlers
// ───────────────────────────────────────────────────────────────

impl From<SaveDraftError> for ApiError {
    fn from(err: SaveDraftError) -> Self {
        match err {
            SaveDraftError::CycleNotFound => ApiError::NotFound("Cycle not found".to_string()),
            SaveDraftError::CycleNotAccepting | SaveDraftError::Frozen(_) => {
                ApiError::BadRequest(err.to_string())
            }
            SaveDraftError::NotReviewer => ApiError::Forbidden(err.to_string()),
            SaveDraftError::Domain(e) => e.into(),
        }
    }
}

impl From<SubmitReviewError> for ApiError {
    fn from(err: SubmitReviewError) -> Self {
        match err {
            SubmitReviewError::NotFound(id) => {
                ApiError::NotFound(format!("Submission not found: {}", id))
            }
            SubmitReviewError::NotReviewer => ApiError::Forbidden(err.to_string()),
            SubmitReviewError::AlreadySubmitted(e) => e.into(),
            SubmitReviewError::Domain(e) => e.into(),
        }
    }
}

impl From<NominatePeersError> for ApiError {
    fn from(err: NominatePeersError) -> Self {
        match err {
            NominatePeersError::CycleNotFound(id) => {
                ApiError::NotFound(format!("Cycle not found: {}", id))
            }
            NominatePeersError::NotAllowed => ApiError::Forbidden(err.to_string()),
            NominatePeersError::CycleNotAccepting
            | NominatePeersError::TooManyPeers { .. }
            | NominatePeersError::SelfNomination => ApiError::BadRequest(err.to_string()),
            NominatePeersError::Domain(e) => e.into(),
        }
    }
}

impl From<SubmissionQueryError> for ApiError {
    fn from(err: SubmissionQueryError) -> Self {
        match err {
            SubmissionQueryError::NotFound(id) => {
                ApiError::NotFound(format!("Submission not found: {}", id))
            }
            SubmissionQueryError::NotVisible => ApiError::Forbidden(err.to_string()),
            SubmissionQueryError::Domain(e) => e.into(),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Scoring handlers
// ───────────────────────────────────────────────────────────────

impl From<GenerateScoreError> for ApiError {
    fn from(err: GenerateScoreError) -> Self {
        match err {
            GenerateScoreError::NotFound(id) => {
                ApiError::NotFound(format!("Submission not found: {}", id))
            }
            GenerateScoreError::NotAllowed => ApiError::Forbidden(err.to_string()),
            GenerateScoreError::Domain(e) => e.into(),
        }
    }
}

impl From<SuggestReviewError> for ApiError {
    fn from(err: SuggestReviewError) -> Self {
        match err {
            SuggestReviewError::NotFound(id) => {
                ApiError::NotFound(format!("Submission not found: {}", id))
            }
            SuggestReviewError::NotReviewer => ApiError::Forbidden(err.to_string()),
            SuggestReviewError::AiUnavailable(source) => {
                tracing::warn!(error = %source, "suggestion request failed on all providers");
                ApiError::AiUnavailable("AI providers unavailable".to_string())
            }
            SuggestReviewError::Domain(e) => e.into(),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// OKR handlers
// ───────────────────────────────────────────────────────────────

impl From<OkrCommandError> for ApiError {
    fn from(err: OkrCommandError) -> Self {
        match err {
            OkrCommandError::NotFound(id) => ApiError::NotFound(format!("OKR not found: {}", id)),
            OkrCommandError::NotOwner => ApiError::Forbidden(err.to_string()),
            OkrCommandError::Validation(e) => e.into(),
            OkrCommandError::Domain(e) => e.into(),
        }
    }
}

impl From<OkrQueryError> for ApiError {
    fn from(err: OkrQueryError) -> Self {
        match err {
            OkrQueryError::NotFound(id) => ApiError::NotFound(format!("OKR not found: {}", id)),
            OkrQueryError::Domain(e) => e.into(),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Feedback handlers
// ───────────────────────────────────────────────────────────────

impl From<CreateFeedbackError> for ApiError {
    fn from(err: CreateFeedbackError) -> Self {
        match err {
            CreateFeedbackError::Validation(e) => e.into(),
            CreateFeedbackError::Domain(e) => e.into(),
        }
    }
}

impl From<ModerateFeedbackError> for ApiError {
    fn from(err: ModerateFeedbackError) -> Self {
        match err {
            ModerateFeedbackError::NotFound(id) => {
                ApiError::NotFound(format!("Feedback not found: {}", id))
            }
            ModerateFeedbackError::Domain(e) => e.into(),
        }
    }
}

impl From<FeedbackQueryError> for ApiError {
    fn from(err: FeedbackQueryError) -> Self {
        match err {
            FeedbackQueryError::Domain(e) => e.into(),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Templates and org
// ───────────────────────────────────────────────────────────────

impl From<CreateTemplateError> for ApiError {
    fn from(err: CreateTemplateError) -> Self {
        match err {
            CreateTemplateError::Validation(e) => e.into(),
            CreateTemplateError::Domain(e) => e.into(),
        }
    }
}

impl From<TemplateQueryError> for ApiError {
    fn from(err: TemplateQueryError) -> Self {
        match err {
            TemplateQueryError::NotFound(id) => {
                ApiError::NotFound(format!("Template not found: {}", id))
            }
            TemplateQueryError::Domain(e) => e.into(),
        }
    }
}

impl From<OrgCommandError> for ApiError {
    fn from(err: OrgCommandError) -> Self {
        match err {
            OrgCommandError::DepartmentNotFound(id) => {
                ApiError::NotFound(format!("Department not found: {}", id))
            }
            OrgCommandError::Validation(e) => e.into(),
            OrgCommandError::Domain(e) => e.into(),
        }
    }
}

impl From<OrgQueryError> for ApiError {
    fn from(err: OrgQueryError) -> Self {
        match err {
            OrgQueryError::Domain(e) => e.into(),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Notifications, analytics, time tracking
// ───────────────────────────────────────────────────────────────

impl From<NotificationApiError> for ApiError {
    fn from(err: NotificationApiError) -> Self {
        match err {
            NotificationApiError::NotFound(id) => {
                ApiError::NotFound(format!("Notification not found: {}", id))
            }
            NotificationApiError::NotOwner => ApiError::Forbidden(err.to_string()),
            NotificationApiError::Domain(e) => e.into(),
        }
    }
}

impl From<AnalyticsError> for ApiError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::Domain(e) => e.into(),
        }
    }
}

impl From<LogTimeError> for ApiError {
    fn from(err: LogTimeError) -> Self {
        match err {
            LogTimeError::Validation(e) => e.into(),
            LogTimeError::NotOwner => ApiError::Forbidden(err.to_string()),
            LogTimeError::Domain(e) => e.into(),
        }
    }
}
