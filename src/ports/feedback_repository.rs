//! Feedback repository port.

use async_trait::async_trait;

use crate::domain::feedback::{Feedback, ModerationStatus};
use crate::domain::foundation::{DomainError, FeedbackId, Timestamp, UserId};

/// Filters for feedback listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackFilter {
    pub to_user: Option<UserId>,
    pub from_user: Option<UserId>,
    pub moderation_status: Option<ModerationStatus>,
}

/// Repository port for Feedback persistence.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn save(&self, feedback: &Feedback) -> Result<(), DomainError>;

    async fn update(&self, feedback: &Feedback) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: FeedbackId) -> Result<Option<Feedback>, DomainError>;

    /// List entries matching the filter, newest first.
    async fn list(
        &self,
        filter: FeedbackFilter,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Feedback>, DomainError>;

    /// Rated entries received by a user since `since`. Feeds the
    /// recent-feedback score component.
    async fn find_rated_since(
        &self,
        to_user: UserId,
        since: Timestamp,
    ) -> Result<Vec<Feedback>, DomainError>;
}
