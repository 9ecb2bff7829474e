//! User entity with role and org placement.

mod entity;

pub use entity::User;
