//! In-app notifications, also delivered by email when the user opts in.

mod aggregate;

pub use aggregate::{Notification, NotificationKind, Priority};
