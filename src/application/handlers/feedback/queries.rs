//! Feedback read handler with visibility filtering.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::feedback::Feedback;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{FeedbackFilter, FeedbackRepository, UserRepository};

#[derive(Debug, thiserror::Error)]
pub enum FeedbackQueryError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListFeedbackQuery {
    pub to_user: Option<UserId>,
    pub from_user: Option<UserId>,
    pub page: u32,
    pub limit: u32,
}

pub struct ListFeedbackHandler {
    feedback: Arc<dyn FeedbackRepository>,
    users: Arc<dyn UserRepository>,
}

impl ListFeedbackHandler {
    pub fn new(feedback: Arc<dyn FeedbackRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { feedback, users }
    }

    /// Lists feedback the caller may see. HR and admins see everything,
    /// including hidden and deleted entries; everyone else is filtered by
    /// per-entry visibility.
    pub async fn handle(
        &self,
        caller: Caller,
        query: ListFeedbackQuery,
    ) -> Result<Vec<Feedback>, FeedbackQueryError> {
        let page = query.page.max(1);
        let limit = query.limit.clamp(1, 100);
        let entries = self
            .feedback
            .list(
                FeedbackFilter {
                    to_user: query.to_user,
                    from_user: query.from_user,
                    moderation_status: None,
                },
                page,
                limit,
            )
            .await?;

        if caller.is_hr_or_admin() {
            return Ok(entries);
        }

        let report_ids = self.report_ids(caller).await?;
        Ok(entries
            .into_iter()
            .filter(|f| {
                let manages = report_ids.contains(&f.to_user());
                f.visible_to(caller.user_id, manages)
            })
            .collect())
    }

    async fn report_ids(&self, caller: Caller) -> Result<Vec<UserId>, DomainError> {
        if !caller.role.is_managerial() {
            return Ok(Vec::new());
        }
        let reports = self.users.find_reports(caller.user_id).await?;
        Ok(reports.into_iter().map(|u| u.id()).collect())
    }
}
