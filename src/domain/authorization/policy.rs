//! The policy table: (resource, action) -> roles allowed.
//!
//! Ownership checks (caller vs aggregate owner) stay in the handlers that
//! have the aggregate loaded; this table answers the pure role question.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::{DomainError, ErrorCode, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Okr,
    CompanyOkr,
    ReviewCycle,
    ReviewSubmission,
    Feedback,
    FeedbackModeration,
    Analytics,
    Notification,
    TimeEntry,
    ReviewTemplate,
    OrgUnit,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

use Action::*;
use Role::*;

static POLICY: Lazy<HashMap<(Resource, Action), &'static [Role]>> = Lazy::new(|| {
    let mut t: HashMap<(Resource, Action), &'static [Role]> = HashMap::new();

    t.insert((Resource::Okr, Create), &[Admin, Hr, Manager, Employee]);
    t.insert((Resource::Okr, Read), &[Admin, Hr, Manager, Employee]);
    t.insert((Resource::Okr, Update), &[Admin, Hr, Manager, Employee]);
    t.insert((Resource::Okr, Delete), &[Admin, Hr, Manager]);
    t.insert((Resource::CompanyOkr, Create), &[Admin, Hr]);
    t.insert((Resource::CompanyOkr, Update), &[Admin, Hr]);
    t.insert((Resource::CompanyOkr, Delete), &[Admin, Hr]);

    t.insert((Resource::ReviewCycle, Create), &[Admin, Hr]);
    t.insert((Resource::ReviewCycle, Read), &[Admin, Hr, Manager, Employee]);
    t.insert((Resource::ReviewCycle, Update), &[Admin, Hr]);
    t.insert((Resource::ReviewCycle, Delete), &[Admin, Hr]);

    t.insert(
        (Resource::ReviewSubmission, Create),
        &[Admin, Hr, Manager, Employee],
    );
    t.insert(
        (Resource::ReviewSubmission, Read),
        &[Admin, Hr, Manager, Employee],
    );
    t.insert(
        (Resource::ReviewSubmission, Update),
        &[Admin, Hr, Manager, Employee],
    );

    t.insert((Resource::Feedback, Create), &[Admin, Hr, Manager, Employee]);
    t.insert((Resource::Feedback, Read), &[Admin, Hr, Manager, Employee]);
    t.insert((Resource::FeedbackModeration, Update), &[Admin, Hr]);

    t.insert((Resource::Analytics, Read), &[Admin, Hr, Manager]);

    t.insert(
        (Resource::Notification, Read),
        &[Admin, Hr, Manager, Employee],
    );
    t.insert(
        (Resource::Notification, Update),
        &[Admin, Hr, Manager, Employee],
    );

    t.insert((Resource::TimeEntry, Create), &[Admin, Hr, Manager, Employee]);
    t.insert((Resource::TimeEntry, Read), &[Admin, Hr, Manager, Employee]);

    t.insert((Resource::ReviewTemplate, Create), &[Admin, Hr]);
    t.insert(
        (Resource::ReviewTemplate, Read),
        &[Admin, Hr, Manager, Employee],
    );
    t.insert((Resource::ReviewTemplate, Update), &[Admin, Hr]);
    t.insert((Resource::ReviewTemplate, Delete), &[Admin, Hr]);

    t.insert((Resource::OrgUnit, Create), &[Admin, Hr]);
    t.insert((Resource::OrgUnit, Read), &[Admin, Hr, Manager, Employee]);
    t.insert((Resource::OrgUnit, Update), &[Admin, Hr]);

    t.insert((Resource::User, Read), &[Admin, Hr, Manager, Employee]);
    t.insert((Resource::User, Update), &[Admin, Hr]);
    t.insert((Resource::User, Delete), &[Admin]);

    t
});

/// Checks the policy table; unlisted (resource, action) pairs deny.
pub fn authorize(role: Role, resource: Resource, action: Action) -> Result<(), DomainError> {
    let allowed = POLICY
        .get(&(resource, action))
        .map(|roles| roles.contains(&role))
        .unwrap_or(false);
    if allowed {
        Ok(())
    } else {
        Err(DomainError::new(
            ErrorCode::Forbidden,
            format!(
                "role {} may not {:?} {:?}",
                role.as_str(),
                action,
                resource
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_admin_and_hr_create_cycles() {
        assert!(authorize(Role::Admin, Resource::ReviewCycle, Create).is_ok());
        assert!(authorize(Role::Hr, Resource::ReviewCycle, Create).is_ok());
        assert!(authorize(Role::Manager, Resource::ReviewCycle, Create).is_err());
        assert!(authorize(Role::Employee, Resource::ReviewCycle, Create).is_err());
    }

    #[test]
    fn company_okrs_are_admin_hr_only() {
        assert!(authorize(Role::Manager, Resource::CompanyOkr, Create).is_err());
        assert!(authorize(Role::Hr, Resource::CompanyOkr, Create).is_ok());
    }

    #[test]
    fn employees_cannot_see_analytics() {
        assert!(authorize(Role::Employee, Resource::Analytics, Read).is_err());
        assert!(authorize(Role::Manager, Resource::Analytics, Read).is_ok());
    }

    #[test]
    fn moderation_is_restricted() {
        assert!(authorize(Role::Employee, Resource::FeedbackModeration, Update).is_err());
        assert!(authorize(Role::Manager, Resource::FeedbackModeration, Update).is_err());
        assert!(authorize(Role::Hr, Resource::FeedbackModeration, Update).is_ok());
    }

    #[test]
    fn unlisted_pairs_deny() {
        assert!(authorize(Role::Admin, Resource::Feedback, Delete).is_err());
    }

    #[test]
    fn denial_carries_forbidden_code() {
        let err = authorize(Role::Employee, Resource::ReviewCycle, Create).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
