//! Review cycle HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CyclesAppState;
pub use routes::cycles_router;
