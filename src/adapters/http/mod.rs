//! HTTP adapters - the REST API surface.
//!
//! Each resource has its own `dto`/`handlers`/`routes` triplet and state;
//! `api_router` assembles them behind the auth middleware, leaving the
//! health endpoints unauthenticated.

pub mod analytics;
pub mod cycles;
pub mod error;
pub mod feedback;
pub mod health;
pub mod middleware;
pub mod notifications;
pub mod okrs;
pub mod org;
pub mod submissions;
pub mod templates;
pub mod time_entries;

pub use analytics::{analytics_router, AnalyticsAppState};
pub use cycles::{cycles_router, CyclesAppState};
pub use error::{ApiError, ErrorResponse};
pub use feedback::{feedback_router, FeedbackAppState};
pub use health::{health_router, HealthAppState};
pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use notifications::{notifications_router, NotificationsAppState};
pub use okrs::{okrs_router, OkrsAppState};
pub use org::{org_router, OrgAppState};
pub use submissions::{submissions_router, SubmissionsAppState};
pub use templates::{templates_router, TemplatesAppState};
pub use time_entries::{time_entries_router, TimeEntriesAppState};

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Per-resource states for the full API.
pub struct ApiStates {
    pub cycles: CyclesAppState,
    pub submissions: SubmissionsAppState,
    pub okrs: OkrsAppState,
    pub feedback: FeedbackAppState,
    pub notifications: NotificationsAppState,
    pub analytics: AnalyticsAppState,
    pub time_entries: TimeEntriesAppState,
    pub templates: TemplatesAppState,
    pub org: OrgAppState,
    pub health: HealthAppState,
}

/// Assembles the full application router.
///
/// Everything under `/api` except the health endpoint goes through the
/// auth middleware; `/live` and `/ready` stay open.
pub fn api_router(states: ApiStates, validator: AuthState) -> Router {
    let protected = Router::new()
        .merge(cycles_router().with_state(states.cycles))
        .merge(submissions_router().with_state(states.submissions))
        .merge(okrs_router().with_state(states.okrs))
        .merge(feedback_router().with_state(states.feedback))
        .merge(notifications_router().with_state(states.notifications))
        .merge(analytics_router().with_state(states.analytics))
        .merge(time_entries_router().with_state(states.time_entries))
        .merge(templates_router().with_state(states.templates))
        .merge(org_router().with_state(states.org))
        .layer(axum::middleware::from_fn_with_state(
            validator,
            auth_middleware,
        ));

    Router::new()
        .merge(health_router().with_state(states.health))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
