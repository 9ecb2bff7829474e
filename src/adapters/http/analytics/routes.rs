//! Route configuration for the analytics endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{feedback_trends, team_performance, AnalyticsAppState};

/// Routes:
/// - `GET /api/analytics/team-performance`
/// - `GET /api/analytics/feedback-trends`
pub fn analytics_router() -> Router<AnalyticsAppState> {
    Router::new()
        .route("/api/analytics/team-performance", get(team_performance))
        .route("/api/analytics/feedback-trends", get(feedback_trends))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockTokenValidator;
    use crate::adapters::cache::InMemoryCache;
    use crate::adapters::http::middleware::{auth_middleware, AuthState};
    use crate::application::handlers::jobs::test_support::StubUsers;
    use crate::application::Caller;
    use crate::domain::analytics::{FeedbackTrendPoint, TeamPerformance, TrendRange};
    use crate::domain::foundation::{DomainError, Role, TeamId, UserId};
    use crate::ports::AnalyticsReader;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StubReader;

    #[async_trait]
    impl AnalyticsReader for StubReader {
        async fn team_performance(
            &self,
            _team: Option<TeamId>,
        ) -> Result<Vec<TeamPerformance>, DomainError> {
            Ok(vec![TeamPerformance {
                team_id: TeamId::new(),
                team_name: "Platform".to_string(),
                member_count: 4,
                avg_okr_score: Some(7.5),
                avg_feedback_rating: Some(8.2),
            }])
        }

        async fn feedback_trends(
            &self,
            _range: TrendRange,
        ) -> Result<Vec<FeedbackTrendPoint>, DomainError> {
            Ok(vec![FeedbackTrendPoint {
                month: "2025-07".to_string(),
                count: 12,
                avg_rating: Some(7.9),
            }])
        }
    }

    fn app(caller: Caller) -> Router {
        let state = AnalyticsAppState {
            reader: Arc::new(StubReader),
            cache: Arc::new(InMemoryCache::new()),
            users: Arc::new(StubUsers { user: None }),
        };
        let validator: AuthState =
            Arc::new(MockTokenValidator::new().with_caller("token", caller));

        analytics_router().with_state(state).layer(
            axum::middleware::from_fn_with_state(validator, auth_middleware),
        )
    }

    #[tokio::test]
    async fn hr_can_read_team_performance() {
        let response = app(Caller::new(UserId::new(), Role::Hr))
            .oneshot(
                Request::builder()
                    .uri("/api/analytics/team-performance")
                    .header("Authorization", "Bearer token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn employees_cannot_read_analytics() {
        let response = app(Caller::new(UserId::new(), Role::Employee))
            .oneshot(
                Request::builder()
                    .uri("/api/analytics/feedback-trends")
                    .header("Authorization", "Bearer token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn inverted_trend_range_is_400() {
        let response = app(Caller::new(UserId::new(), Role::Hr))
            .oneshot(
                Request::builder()
                    .uri(
                        "/api/analytics/feedback-trends?from=2025-08-01T00:00:00Z&to=2025-02-01T00:00:00Z",
                    )
                    .header("Authorization", "Bearer token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
