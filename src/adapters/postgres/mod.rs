//! PostgreSQL implementations of the repository ports.
//!
//! Embedded collections (participants, questions, key results, responses,
//! notification metadata) are stored as JSONB columns on the aggregate row.

mod analytics_reader;
mod cycle_repository;
mod feedback_repository;
mod notification_repository;
mod okr_repository;
mod org_repository;
mod submission_repository;
mod template_repository;
mod time_entry_repository;
mod user_repository;

pub use analytics_reader::PostgresAnalyticsReader;
pub use cycle_repository::PostgresCycleRepository;
pub use feedback_repository::PostgresFeedbackRepository;
pub use notification_repository::PostgresNotificationRepository;
pub use okr_repository::PostgresOkrRepository;
pub use org_repository::PostgresOrgRepository;
pub use submission_repository::PostgresSubmissionRepository;
pub use template_repository::PostgresTemplateRepository;
pub use time_entry_repository::PostgresTimeEntryRepository;
pub use user_repository::PostgresUserRepository;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Serializes an embedded collection for a JSONB column.
pub(crate) fn to_jsonb<T: serde::Serialize>(
    value: &T,
    column: &str,
) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(value).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to serialize {}: {}", column, e),
        )
    })
}

/// Deserializes a JSONB column back into its embedded collection.
pub(crate) fn from_jsonb<T: serde::de::DeserializeOwned>(
    value: serde_json::Value,
    column: &str,
) -> Result<T, DomainError> {
    serde_json::from_value(value).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to deserialize {}: {}", column, e),
        )
    })
}

/// Maps a sqlx error on a write or read to a database DomainError.
pub(crate) fn db_error(action: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to {}: {}", action, e),
    )
}
