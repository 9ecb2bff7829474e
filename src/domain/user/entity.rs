//! User entity. Deactivation is the soft delete.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DepartmentId, Role, TeamId, Timestamp, UserId, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: String,
    name: String,
    role: Role,
    department_id: Option<DepartmentId>,
    team_id: Option<TeamId>,
    manager_id: Option<UserId>,
    hired_at: Option<Timestamp>,
    is_active: bool,
    email_notifications: bool,
    created_at: Timestamp,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Result<Self, ValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !email.contains('@') {
            return Err(ValidationError::invalid_format(
                "email",
                "expected an address containing '@'",
            ));
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: UserId::new(),
            email,
            name,
            role,
            department_id: None,
            team_id: None,
            manager_id: None,
            hired_at: None,
            is_active: true,
            email_notifications: true,
            created_at: Timestamp::now(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: UserId,
        email: String,
        name: String,
        role: Role,
        department_id: Option<DepartmentId>,
        team_id: Option<TeamId>,
        manager_id: Option<UserId>,
        hired_at: Option<Timestamp>,
        is_active: bool,
        email_notifications: bool,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            email,
            name,
            role,
            department_id,
            team_id,
            manager_id,
            hired_at,
            is_active,
            email_notifications,
            created_at,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn department_id(&self) -> Option<DepartmentId> {
        self.department_id
    }

    pub fn team_id(&self) -> Option<TeamId> {
        self.team_id
    }

    pub fn manager_id(&self) -> Option<UserId> {
        self.manager_id
    }

    pub fn hired_at(&self) -> Option<Timestamp> {
        self.hired_at
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn email_notifications(&self) -> bool {
        self.email_notifications
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn assign_to(mut self, department: Option<DepartmentId>, team: Option<TeamId>) -> Self {
        self.department_id = department;
        self.team_id = team;
        self
    }

    pub fn with_manager(mut self, manager: UserId) -> Self {
        self.manager_id = Some(manager);
        self
    }

    pub fn with_hired_at(mut self, hired_at: Timestamp) -> Self {
        self.hired_at = Some(hired_at);
        self
    }

    pub fn set_email_notifications(&mut self, enabled: bool) {
        self.email_notifications = enabled;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Whole months since hire, 0 for users with no hire date. Feeds the
    /// tenure component of the AI score.
    pub fn tenure_months(&self, now: Timestamp) -> u32 {
        match self.hired_at {
            Some(hired) => now.months_since(&hired).max(0) as u32,
            None => 0,
        }
    }
}
