//! Route configuration for the notification endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{list_notifications, mark_all_read, mark_read, NotificationsAppState};

/// Routes:
/// - `GET /api/notifications`
/// - `POST /api/notifications/:id/read`
/// - `POST /api/notifications/read-all`
pub fn notifications_router() -> Router<NotificationsAppState> {
    Router::new()
        .route("/api/notifications", get(list_notifications))
        .route("/api/notifications/read-all", post(mark_all_read))
        .route("/api/notifications/:id/read", post(mark_read))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockTokenValidator;
    use crate::adapters::http::middleware::{auth_middleware, AuthState};
    use crate::application::handlers::jobs::test_support::RecordingNotifications;
    use crate::application::Caller;
    use crate::domain::foundation::{Role, UserId};
    use crate::domain::notification::{Notification, NotificationKind, Priority};
    use crate::ports::NotificationRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(notifications: Arc<RecordingNotifications>, caller: Caller) -> Router {
        let state = NotificationsAppState::new(notifications);
        let validator: AuthState =
            Arc::new(MockTokenValidator::new().with_caller("token", caller));

        notifications_router().with_state(state).layer(
            axum::middleware::from_fn_with_state(validator, auth_middleware),
        )
    }

    #[tokio::test]
    async fn list_notifications_returns_own_items() {
        let caller = Caller::new(UserId::new(), Role::Employee);
        let notifications = RecordingNotifications::new();
        let notification = Notification::new(
            caller.user_id,
            NotificationKind::ReviewReminder,
            "Review due".to_string(),
            "Your self review closes in 3 days".to_string(),
            Priority::Normal,
        )
        .unwrap();
        notifications.save(&notification).await.unwrap();

        let response = app(notifications, caller)
            .oneshot(
                Request::builder()
                    .uri("/api/notifications")
                    .header("Authorization", "Bearer token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn marking_another_users_notification_is_forbidden() {
        let caller = Caller::new(UserId::new(), Role::Employee);
        let notifications = RecordingNotifications::new();
        let notification = Notification::new(
            UserId::new(),
            NotificationKind::ReviewReminder,
            "Review due".to_string(),
            "closes soon".to_string(),
            Priority::Normal,
        )
        .unwrap();
        notifications.save(&notification).await.unwrap();

        let response = app(notifications, caller)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/notifications/{}/read", notification.id()))
                    .header("Authorization", "Bearer token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
