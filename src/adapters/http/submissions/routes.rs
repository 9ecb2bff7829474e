//! Route configuration for the review submission endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    generate_score, get_submission, list_cycle_submissions, nominate_peers, save_draft,
    submit_review, suggest_review, SubmissionsAppState,
};

/// Routes:
/// - `PUT /api/submissions/draft`
/// - `GET /api/submissions/:id`
/// - `POST /api/submissions/:id/submit`
/// - `POST /api/submissions/:id/suggestion`
/// - `POST /api/submissions/:id/score`
/// - `POST /api/cycles/:id/nominations`
/// - `GET /api/cycles/:id/submissions`
pub fn submissions_router() -> Router<SubmissionsAppState> {
    Router::new()
        .route("/api/submissions/draft", put(save_draft))
        .route("/api/submissions/:id", get(get_submission))
        .route("/api/submissions/:id/submit", post(submit_review))
        .route("/api/submissions/:id/suggestion", post(suggest_review))
        .route("/api/submissions/:id/score", post(generate_score))
        .route("/api/cycles/:id/nominations", post(nominate_peers))
        .route("/api/cycles/:id/submissions", get(list_cycle_submissions))
}
