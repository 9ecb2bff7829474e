//! Route configuration for the continuous feedback endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{create_feedback, list_feedback, moderate_feedback, FeedbackAppState};

/// Routes:
/// - `POST /api/feedback`
/// - `GET /api/feedback`
/// - `POST /api/feedback/:id/moderate`
pub fn feedback_router() -> Router<FeedbackAppState> {
    Router::new()
        .route("/api/feedback", post(create_feedback).get(list_feedback))
        .route("/api/feedback/:id/moderate", post(moderate_feedback))
}
