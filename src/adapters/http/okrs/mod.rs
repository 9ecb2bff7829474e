//! OKR HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::OkrsAppState;
pub use routes::okrs_router;
