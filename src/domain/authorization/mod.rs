//! Role-based access control as a declarative policy table.

mod policy;

pub use policy::{authorize, Action, Resource};
