//! Route configuration for the time tracking endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{list_time_entries, log_time, TimeEntriesAppState};

/// Routes:
/// - `POST /api/time-entries`
/// - `GET /api/time-entries`
pub fn time_entries_router() -> Router<TimeEntriesAppState> {
    Router::new().route("/api/time-entries", post(log_time).get(list_time_entries))
}
