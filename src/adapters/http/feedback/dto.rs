//! JSON request/response types for the continuous feedback endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::feedback::{Feedback, ModerationStatus, Sentiment};

use super::super::cycles::dto::{default_limit, default_page};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFeedbackRequest {
    pub to_user: String,
    pub content: String,
    pub rating: Option<u8>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModerateFeedbackRequest {
    pub status: ModerationStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListFeedbackParams {
    pub to_user: Option<String>,
    pub from_user: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub id: String,
    pub from_user: String,
    pub to_user: String,
    pub content: String,
    pub rating: Option<u8>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub sentiment: Sentiment,
    pub moderation_status: ModerationStatus,
    pub created_at: String,
}

impl From<&Feedback> for FeedbackResponse {
    fn from(feedback: &Feedback) -> Self {
        Self {
            id: feedback.id().to_string(),
            from_user: feedback.from_user().to_string(),
            to_user: feedback.to_user().to_string(),
            content: feedback.content().to_string(),
            rating: feedback.rating().map(|r| r.value()),
            category: feedback.category().map(String::from),
            tags: feedback.tags().to_vec(),
            sentiment: feedback.sentiment(),
            moderation_status: feedback.moderation_status(),
            created_at: feedback.created_at().to_rfc3339(),
        }
    }
}
