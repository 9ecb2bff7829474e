//! Route configuration for the OKR endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    archive_okr, create_okr, get_okr, list_okrs, update_progress, OkrsAppState,
};

/// Routes:
/// - `POST /api/okrs`
/// - `GET /api/okrs`
/// - `GET /api/okrs/:id`
/// - `POST /api/okrs/:id/progress`
/// - `POST /api/okrs/:id/archive`
pub fn okrs_router() -> Router<OkrsAppState> {
    Router::new()
        .route("/api/okrs", post(create_okr).get(list_okrs))
        .route("/api/okrs/:id", get(get_okr))
        .route("/api/okrs/:id/progress", post(update_progress))
        .route("/api/okrs/:id/archive", post(archive_okr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockTokenValidator;
    use crate::adapters::http::middleware::{auth_middleware, AuthState};
    use crate::application::handlers::okr::test_support::MockOkrRepo;
    use crate::application::Caller;
    use crate::domain::foundation::{Role, UserId};
    use crate::domain::okr::{KeyResult, Okr, OkrType};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_okr(owner: UserId) -> Okr {
        Okr::new(
            "Ship the reporting pipeline",
            OkrType::Individual,
            None,
            owner,
            owner,
            vec![KeyResult::new("Dashboards live", 5.0, None).unwrap()],
        )
        .unwrap()
    }

    fn app(okrs: Arc<MockOkrRepo>, caller: Caller) -> Router {
        let state = OkrsAppState::new(okrs);
        let validator: AuthState =
            Arc::new(MockTokenValidator::new().with_caller("token", caller));

        okrs_router().with_state(state).layer(
            axum::middleware::from_fn_with_state(validator, auth_middleware),
        )
    }

    #[tokio::test]
    async fn create_okr_defaults_assignment_to_the_caller() {
        let caller = Caller::new(UserId::new(), Role::Employee);
        let okrs = MockOkrRepo::new();
        let app = app(okrs.clone(), caller);

        let body = serde_json::json!({
            "objective": "Improve onboarding",
            "okr_type": "individual",
            "key_results": [
                {"title": "Cut time-to-first-review to 2 days", "target_value": 2.0}
            ]
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/okrs")
                    .header("Authorization", "Bearer token")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let saved = okrs.all();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].assigned_to(), caller.user_id);
    }

    #[tokio::test]
    async fn company_okr_is_forbidden_for_employees() {
        let app = app(
            MockOkrRepo::new(),
            Caller::new(UserId::new(), Role::Employee),
        );

        let body = serde_json::json!({
            "objective": "Grow revenue 20%",
            "okr_type": "company",
            "key_results": [
                {"title": "ARR", "target_value": 20.0, "unit": "percent"}
            ]
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/okrs")
                    .header("Authorization", "Bearer token")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn progress_update_returns_okr_and_snapshot() {
        let caller = Caller::new(UserId::new(), Role::Employee);
        let okr = test_okr(caller.user_id);
        let id = okr.id();
        let app = app(MockOkrRepo::with(vec![okr]), caller);

        let body = serde_json::json!({
            "key_result_index": 0,
            "current_value": 3.0,
            "score": 6
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/okrs/{}/progress", id))
                    .header("Authorization", "Bearer token")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn out_of_range_score_is_400() {
        let caller = Caller::new(UserId::new(), Role::Employee);
        let okr = test_okr(caller.user_id);
        let id = okr.id();
        let app = app(MockOkrRepo::with(vec![okr]), caller);

        let body = serde_json::json!({
            "key_result_index": 0,
            "current_value": 3.0,
            "score": 12
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/okrs/{}/progress", id))
                    .header("Authorization", "Bearer token")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
