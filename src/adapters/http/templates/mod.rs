//! Review template HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::TemplatesAppState;
pub use routes::templates_router;
