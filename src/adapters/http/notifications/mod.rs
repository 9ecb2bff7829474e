//! Notification HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::NotificationsAppState;
pub use routes::notifications_router;
