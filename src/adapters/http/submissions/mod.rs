//! Review submission HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SubmissionsAppState;
pub use routes::submissions_router;
