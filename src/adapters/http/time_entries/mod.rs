//! Time tracking HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::TimeEntriesAppState;
pub use routes::time_entries_router;
