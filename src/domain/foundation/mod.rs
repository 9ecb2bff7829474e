//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Perfhub domain.

mod errors;
mod ids;
mod role;
mod score;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    CycleId, DepartmentId, FeedbackId, NotificationId, OkrId, SubmissionId, TeamId, TemplateId,
    TimeEntryId, UserId,
};
pub use role::Role;
pub use score::{KrScore, RatingValue};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
