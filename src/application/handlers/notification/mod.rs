//! Notification creation service and the notifications API handlers.

mod notifier;
mod queries;

pub use notifier::{EmailOutcome, Notifier};
pub use queries::{
    ListNotificationsHandler, ListNotificationsQuery, MarkReadHandler, NotificationApiError,
};
