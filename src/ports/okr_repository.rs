//! OKR repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OkrId, UserId};
use crate::domain::okr::{Okr, OkrStatus, OkrType};

/// Filters for OKR listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct OkrFilter {
    pub okr_type: Option<OkrType>,
    pub status: Option<OkrStatus>,
    pub assigned_to: Option<UserId>,
}

/// Repository port for Okr aggregate persistence.
#[async_trait]
pub trait OkrRepository: Send + Sync {
    async fn save(&self, okr: &Okr) -> Result<(), DomainError>;

    async fn update(&self, okr: &Okr) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: OkrId) -> Result<Option<Okr>, DomainError>;

    /// List OKRs matching the filter, newest first.
    async fn list(&self, filter: OkrFilter, page: u32, limit: u32)
        -> Result<Vec<Okr>, DomainError>;

    /// Active OKRs assigned to a user. Feeds the OKR score component.
    async fn find_active_for_user(&self, user_id: UserId) -> Result<Vec<Okr>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn okr_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn OkrRepository) {}
    }
}
