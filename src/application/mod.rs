//! Application layer - command and query handlers orchestrating the domain
//! through ports.

pub mod handlers;

mod caller;

pub use caller::Caller;
