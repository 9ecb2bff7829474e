//! Route configuration for the org endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{create_department, create_team, list_departments, list_teams, OrgAppState};

/// Routes:
/// - `POST /api/org/departments`
/// - `GET /api/org/departments`
/// - `POST /api/org/teams`
/// - `GET /api/org/teams`
pub fn org_router() -> Router<OrgAppState> {
    Router::new()
        .route(
            "/api/org/departments",
            post(create_department).get(list_departments),
        )
        .route("/api/org/teams", post(create_team).get(list_teams))
}
