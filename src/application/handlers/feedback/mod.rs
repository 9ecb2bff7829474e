//! Continuous feedback handlers.

mod create_feedback;
mod moderate_feedback;
mod queries;
#[cfg(test)]
pub(crate) mod test_support;

pub use create_feedback::{CreateFeedbackCommand, CreateFeedbackError, CreateFeedbackHandler};
pub use moderate_feedback::{ModerateFeedbackError, ModerateFeedbackHandler};
pub use queries::{FeedbackQueryError, ListFeedbackHandler, ListFeedbackQuery};
