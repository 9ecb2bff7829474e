//! Route configuration for the review template endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    create_template, delete_template, get_template, list_templates, TemplatesAppState,
};

/// Routes:
/// - `POST /api/templates`
/// - `GET /api/templates`
/// - `GET /api/templates/:id`
/// - `DELETE /api/templates/:id`
pub fn templates_router() -> Router<TemplatesAppState> {
    Router::new()
        .route("/api/templates", post(create_template).get(list_templates))
        .route(
            "/api/templates/:id",
            get(get_template).delete(delete_template),
        )
}
