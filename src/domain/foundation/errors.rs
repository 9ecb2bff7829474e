//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Not found errors
    UserNotFound,
    OkrNotFound,
    CycleNotFound,
    SubmissionNotFound,
    FeedbackNotFound,
    NotificationNotFound,
    TemplateNotFound,
    TeamNotFound,

    // State errors
    InvalidStateTransition,
    CycleNotAcceptingParticipants,
    CycleNotDeletable,
    SubmissionFrozen,
    DuplicateSubmission,
    OkrArchived,

    // Authorization errors
    Unauthorized,
    Forbidden,

    // AI errors
    AiProviderError,
    AiUnavailable,

    // Infrastructure errors
    DatabaseError,
    CacheError,
    EmailError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::OkrNotFound => "OKR_NOT_FOUND",
            ErrorCode::CycleNotFound => "CYCLE_NOT_FOUND",
            ErrorCode::SubmissionNotFound => "SUBMISSION_NOT_FOUND",
            ErrorCode::FeedbackNotFound => "FEEDBACK_NOT_FOUND",
            ErrorCode::NotificationNotFound => "NOTIFICATION_NOT_FOUND",
            ErrorCode::TemplateNotFound => "TEMPLATE_NOT_FOUND",
            ErrorCode::TeamNotFound => "TEAM_NOT_FOUND",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::CycleNotAcceptingParticipants => "CYCLE_NOT_ACCEPTING_PARTICIPANTS",
            ErrorCode::CycleNotDeletable => "CYCLE_NOT_DELETABLE",
            ErrorCode::SubmissionFrozen => "SUBMISSION_FROZEN",
            ErrorCode::DuplicateSubmission => "DUPLICATE_SUBMISSION",
            ErrorCode::OkrArchived => "OKR_ARCHIVED",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::AiProviderError => "AI_PROVIDER_ERROR",
            ErrorCode::AiUnavailable => "AI_UNAVAILABLE",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::CacheError => "CACHE_ERROR",
            ErrorCode::EmailError => "EMAIL_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns true if this error represents a missing aggregate.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::UserNotFound
                | ErrorCode::OkrNotFound
                | ErrorCode::CycleNotFound
                | ErrorCode::SubmissionNotFound
                | ErrorCode::FeedbackNotFound
                | ErrorCode::NotificationNotFound
                | ErrorCode::TemplateNotFound
                | ErrorCode::TeamNotFound
        )
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("title");
        assert_eq!(format!("{}", err), "Field 'title' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("score", 1.0, 10.0, 12.0);
        assert_eq!(
            format!("{}", err),
            "Field 'score' must be between 1 and 10, got 12"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::CycleNotFound, "Cycle not found");
        assert_eq!(format!("{}", err), "[CYCLE_NOT_FOUND] Cycle not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_detail("field", "end_date")
            .with_detail("reason", "before start");

        assert_eq!(err.details.get("field"), Some(&"end_date".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"before start".to_string()));
    }

    #[test]
    fn validation_error_converts_to_domain_error() {
        let err: DomainError = ValidationError::empty_field("name").into();
        assert_eq!(err.code, ErrorCode::EmptyField);
        assert!(err.message.contains("name"));
    }

    #[test]
    fn not_found_classification() {
        assert!(DomainError::new(ErrorCode::OkrNotFound, "x").is_not_found());
        assert!(!DomainError::new(ErrorCode::DatabaseError, "x").is_not_found());
    }
}
