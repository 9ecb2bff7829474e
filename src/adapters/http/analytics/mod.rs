//! Analytics HTTP adapter.

pub mod handlers;
pub mod routes;

pub use handlers::AnalyticsAppState;
pub use routes::analytics_router;
