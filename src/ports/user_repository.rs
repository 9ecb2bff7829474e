//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TeamId, UserId};
use crate::domain::user::User;

/// Repository port for User persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    async fn update(&self, user: &User) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Active members of a team.
    async fn find_by_team(&self, team_id: TeamId) -> Result<Vec<User>, DomainError>;

    /// Active direct reports of a manager.
    async fn find_reports(&self, manager_id: UserId) -> Result<Vec<User>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
