//! Route configuration for the review cycle endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    add_participants, create_cycle, delete_cycle, get_cycle, list_cycles, transition_cycle,
    CyclesAppState,
};

/// Routes:
/// - `POST /api/cycles`
/// - `GET /api/cycles`
/// - `GET /api/cycles/:id`
/// - `DELETE /api/cycles/:id`
/// - `POST /api/cycles/:id/transition`
/// - `POST /api/cycles/:id/participants`
pub fn cycles_router() -> Router<CyclesAppState> {
    Router::new()
        .route("/api/cycles", post(create_cycle).get(list_cycles))
        .route("/api/cycles/:id", get(get_cycle).delete(delete_cycle))
        .route("/api/cycles/:id/transition", post(transition_cycle))
        .route("/api/cycles/:id/participants", post(add_participants))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockTokenValidator;
    use crate::adapters::http::middleware::{auth_middleware, AuthState};
    use crate::application::handlers::jobs::test_support::{
        notifier, RecordingEmail, RecordingNotifications,
    };
    use crate::application::handlers::review_cycle::test_support::MockCycleRepo;
    use crate::application::handlers::review_template::test_support::MockTemplateRepo;
    use crate::application::Caller;
    use crate::domain::foundation::{Role, Timestamp, UserId};
    use crate::domain::review_cycle::{CycleSettings, CycleType, ReviewCycle};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn hr_caller() -> Caller {
        Caller::new(UserId::new(), Role::Hr)
    }

    fn test_cycle() -> ReviewCycle {
        let now = Timestamp::now();
        ReviewCycle::new(
            "Q3 2025".to_string(),
            CycleType::Quarterly,
            now.plus_days(7),
            now.plus_days(97),
            false,
            CycleSettings::default(),
            UserId::new(),
        )
        .unwrap()
    }

    fn app(cycles: Arc<MockCycleRepo>, caller: Caller) -> Router {
        let notifications = RecordingNotifications::new();
        let email = RecordingEmail::new();
        let state = CyclesAppState::new(
            cycles,
            Arc::new(MockTemplateRepo::new()),
            notifier(notifications, None, email),
        );
        let validator: AuthState =
            Arc::new(MockTokenValidator::new().with_caller("token", caller));

        cycles_router().with_state(state).layer(
            axum::middleware::from_fn_with_state(validator, auth_middleware),
        )
    }

    #[tokio::test]
    async fn get_cycle_returns_the_cycle() {
        let cycle = test_cycle();
        let id = cycle.id();
        let app = app(MockCycleRepo::with(vec![cycle]), hr_caller());

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/cycles/{}", id))
                    .header("Authorization", "Bearer token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn create_cycle_returns_201_for_hr() {
        let app = app(MockCycleRepo::with(vec![]), hr_caller());
        let start = Timestamp::now().plus_days(7).to_rfc3339();
        let end = Timestamp::now().plus_days(97).to_rfc3339();
        let body = serde_json::json!({
            "name": "Q3 2025",
            "cycle_type": "quarterly",
            "start_date": start,
            "end_date": end
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/cycles")
                    .header("Authorization", "Bearer token")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn create_cycle_is_forbidden_for_employees() {
        let app = app(
            MockCycleRepo::with(vec![]),
            Caller::new(UserId::new(), Role::Employee),
        );
        let start = Timestamp::now().plus_days(7).to_rfc3339();
        let end = Timestamp::now().plus_days(97).to_rfc3339();
        let body = serde_json::json!({
            "name": "Q3 2025",
            "cycle_type": "quarterly",
            "start_date": start,
            "end_date": end
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/cycles")
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
    async fn unauthenticated_request_gets_401() {
        let app = app(MockCycleRepo::with(vec![]), hr_caller());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/cycles")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn invalid_cycle_id_gets_400() {
        let app = app(MockCycleRepo::with(vec![]), hr_caller());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/cycles/not-a-uuid")
                    .header("Authorization", "Bearer token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
