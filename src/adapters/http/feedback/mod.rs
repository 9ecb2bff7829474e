//! Continuous feedback HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::FeedbackAppState;
pub use routes::feedback_router;
