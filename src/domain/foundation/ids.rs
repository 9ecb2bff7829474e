//! Strongly-typed identifier value objects.
//!
//! Every aggregate gets its own UUID newtype so that a cycle id can never
//! be passed where a submission id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a user.
    UserId
);
uuid_id!(
    /// Unique identifier for a department.
    DepartmentId
);
uuid_id!(
    /// Unique identifier for a team.
    TeamId
);
uuid_id!(
    /// Unique identifier for an OKR.
    OkrId
);
uuid_id!(
    /// Unique identifier for a review cycle.
    CycleId
);
uuid_id!(
    /// Unique identifier for a review submission.
    SubmissionId
);
uuid_id!(
    /// Unique identifier for a feedback record.
    FeedbackId
);
uuid_id!(
    /// Unique identifier for a notification.
    NotificationId
);
uuid_id!(
    /// Unique identifier for a time entry.
    TimeEntryId
);
uuid_id!(
    /// Unique identifier for a review template.
    TemplateId
);
