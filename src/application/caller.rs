//! The authenticated caller, as extracted from the JWT.

use crate::domain::foundation::{Role, UserId};

/// Identity and role of the user making a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: UserId,
    pub role: Role,
}

impl Caller {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn is_hr_or_admin(&self) -> bool {
        self.role.is_hr_or_admin()
    }
}
