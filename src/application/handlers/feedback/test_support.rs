//! Shared mock feedback repository.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::feedback::Feedback;
use crate::domain::foundation::{DomainError, FeedbackId, Timestamp, UserId};
use crate::ports::{FeedbackFilter, FeedbackRepository};

pub struct MockFeedbackRepo {
    items: Mutex<Vec<Feedback>>,
}

impl MockFeedbackRepo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            items: Mutex::new(Vec::new()),
        })
    }

    pub fn with(items: Vec<Feedback>) -> Arc<Self> {
        Arc::new(Self {
            items: Mutex::new(items),
        })
    }

    pub fn all(&self) -> Vec<Feedback> {
        self.items.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedbackRepository for MockFeedbackRepo {
    async fn save(&self, feedback: &Feedback) -> Result<(), DomainError> {
        self.items.lock().unwrap().push(feedback.clone());
        Ok(())
    }

    async fn update(&self, feedback: &Feedback) -> Result<(), DomainError> {
        let mut items = self.items.lock().unwrap();
        if let Some(slot) = items.iter_mut().find(|f| f.id() == feedback.id()) {
            *slot = feedback.clone();
        }
        Ok(())
    }

    async fn find_by_id(&self, id: FeedbackId) -> Result<Option<Feedback>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id() == id)
            .cloned())
    }

    async fn list(
        &self,
        filter: FeedbackFilter,
        _page: u32,
        _limit: u32,
    ) -> Result<Vec<Feedback>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|f| filter.to_user.map_or(true, |u| f.to_user() == u))
            .filter(|f| filter.from_user.map_or(true, |u| f.from_user() == u))
            .filter(|f| {
                filter
                    .moderation_status
                    .map_or(true, |s| f.moderation_status() == s)
            })
            .cloned()
            .collect())
    }

    async fn find_rated_since(
        &self,
        to_user: UserId,
        _since: Timestamp,
    ) -> Result<Vec<Feedback>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.to_user() == to_user && f.rating().is_some())
            .cloned()
            .collect())
    }
}
