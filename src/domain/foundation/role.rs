//! Role enum for role-based access control.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// User role within the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Hr,
    Manager,
    #[default]
    Employee,
}

impl Role {
    /// All roles, ordered from most to least privileged.
    pub fn all() -> [Role; 4] {
        [Role::Admin, Role::Hr, Role::Manager, Role::Employee]
    }

    /// Returns true if this role carries people-management authority.
    pub fn is_managerial(&self) -> bool {
        matches!(self, Role::Admin | Role::Hr | Role::Manager)
    }

    /// Returns true if this role administers review cycles and org data.
    pub fn is_hr_or_admin(&self) -> bool {
        matches!(self, Role::Admin | Role::Hr)
    }

    /// Stable string form used in tokens and the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Hr => "hr",
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "hr" => Ok(Role::Hr),
            "manager" => Ok(Role::Manager),
            "employee" => Ok(Role::Employee),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role: {}", other),
            )),
        }
    }
}
