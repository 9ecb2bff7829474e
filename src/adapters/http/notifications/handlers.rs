//! HTTP handlers for the notification endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::response::IntoResponse;

use crate::application::handlers::notification::{
    ListNotificationsHandler, ListNotificationsQuery, MarkReadHandler,
};
use crate::domain::foundation::NotificationId;
use crate::ports::NotificationRepository;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::dto::{ListNotificationsParams, MarkAllReadResponse, NotificationResponse};

#[derive(Clone)]
pub struct NotificationsAppState {
    pub notifications: Arc<dyn NotificationRepository>,
}

impl NotificationsAppState {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    fn list_handler(&self) -> ListNotificationsHandler {
        ListNotificationsHandler::new(self.notifications.clone())
    }

    fn mark_read_handler(&self) -> MarkReadHandler {
        MarkReadHandler::new(self.notifications.clone())
    }
}

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<NotificationsAppState>,
    RequireAuth(caller): RequireAuth,
    Query(params): Query<ListNotificationsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListNotificationsQuery {
        unread_only: params.unread_only,
        page: params.page,
        limit: params.limit,
    };
    let items = state.list_handler().handle(caller, query).await?;
    let body: Vec<NotificationResponse> = items.iter().map(NotificationResponse::from).collect();
    Ok(Json(body))
}

/// POST /api/notifications/:id/read
pub async fn mark_read(
    State(state): State<NotificationsAppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let notification_id: NotificationId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid notification ID format"))?;
    let notification = state
        .mark_read_handler()
        .mark_read(caller, notification_id)
        .await?;
    Ok(Json(NotificationResponse::from(&notification)))
}

/// POST /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<NotificationsAppState>,
    RequireAuth(caller): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let updated = state.mark_read_handler().mark_all_read(caller).await?;
    Ok(Json(MarkAllReadResponse { updated }))
}
