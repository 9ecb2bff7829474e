//! Departments and teams HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::OrgAppState;
pub use routes::org_router;
