//! Feedback entries with sentiment and moderation state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{FeedbackId, RatingValue, Timestamp, UserId, ValidationError};

/// Tone classification attached to a feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            other => Err(ValidationError::invalid_format(
                "sentiment",
                format!("unknown sentiment: {}", other),
            )),
        }
    }
}

/// Moderation state. Entries start active; moderators can hide, flag, or
/// delete them. Only `Active` entries are shown outside moderator views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModerationStatus {
    #[default]
    Active,
    Hidden,
    Flagged,
    Deleted,
}

impl ModerationStatus {
    /// Whether non-moderators may see an entry in this state.
    pub fn is_visible(&self) -> bool {
        matches!(self, ModerationStatus::Active | ModerationStatus::Flagged)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationStatus::Active => "active",
            ModerationStatus::Hidden => "hidden",
            ModerationStatus::Flagged => "flagged",
            ModerationStatus::Deleted => "deleted",
        }
    }
}

impl FromStr for ModerationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ModerationStatus::Active),
            "hidden" => Ok(ModerationStatus::Hidden),
            "flagged" => Ok(ModerationStatus::Flagged),
            "deleted" => Ok(ModerationStatus::Deleted),
            other => Err(ValidationError::invalid_format(
                "moderation_status",
                format!("unknown moderation status: {}", other),
            )),
        }
    }
}

/// A feedback entry from one user to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    id: FeedbackId,
    from_user: UserId,
    to_user: UserId,
    content: String,
    rating: Option<RatingValue>,
    category: Option<String>,
    tags: Vec<String>,
    sentiment: Sentiment,
    moderation_status: ModerationStatus,
    created_at: Timestamp,
}

impl Feedback {
    /// Creates a new active feedback entry. Self-feedback is rejected.
    pub fn new(
        from_user: UserId,
        to_user: UserId,
        content: impl Into<String>,
        rating: Option<RatingValue>,
        category: Option<String>,
        tags: Vec<String>,
        sentiment: Sentiment,
    ) -> Result<Self, ValidationError> {
        if from_user == to_user {
            return Err(ValidationError::invalid_format(
                "to_user",
                "feedback cannot be addressed to its author",
            ));
        }
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        Ok(Self {
            id: FeedbackId::new(),
            from_user,
            to_user,
            content,
            rating,
            category,
            tags,
            sentiment,
            moderation_status: ModerationStatus::Active,
            created_at: Timestamp::now(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: FeedbackId,
        from_user: UserId,
        to_user: UserId,
        content: String,
        rating: Option<RatingValue>,
        category: Option<String>,
        tags: Vec<String>,
        sentiment: Sentiment,
        moderation_status: ModerationStatus,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            from_user,
            to_user,
            content,
            rating,
            category,
            tags,
            sentiment,
            moderation_status,
            created_at,
        }
    }

    pub fn id(&self) -> FeedbackId {
        self.id
    }

    pub fn from_user(&self) -> UserId {
        self.from_user
    }

    pub fn to_user(&self) -> UserId {
        self.to_user
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn rating(&self) -> Option<RatingValue> {
        self.rating
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    pub fn moderation_status(&self) -> ModerationStatus {
        self.moderation_status
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn moderate(&mut self, status: ModerationStatus) {
        self.moderation_status = status;
    }

    /// Whether `viewer` may read this entry without moderator privileges.
    /// Authors always see their own entries; others see visible entries
    /// addressed to them or, for managers, to their reports.
    pub fn visible_to(&self, viewer: UserId, viewer_manages_recipient: bool) -> bool {
        if viewer == self.from_user {
            return true;
        }
        if !self.moderation_status.is_visible() {
            return false;
        }
        viewer == self.to_user || viewer_manages_recipient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Feedback {
        Feedback::new(
            UserId::new(),
            UserId::new(),
            "Great work on the launch",
            RatingValue::new(5).ok(),
            Some("collaboration".to_string()),
            vec!["launch".to_string()],
            Sentiment::Positive,
        )
        .unwrap()
    }

    #[test]
    fn new_entries_start_active() {
        assert_eq!(entry().moderation_status(), ModerationStatus::Active);
    }

    #[test]
    fn rejects_self_feedback() {
        let me = UserId::new();
        let result = Feedback::new(me, me, "note to self", None, None, vec![], Sentiment::Neutral);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_empty_content() {
        let result = Feedback::new(
            UserId::new(),
            UserId::new(),
            "   ",
            None,
            None,
            vec![],
            Sentiment::Neutral,
        );
        assert!(result.is_err());
    }

    #[test]
    fn recipient_and_manager_see_active_entries() {
        let fb = entry();
        assert!(fb.visible_to(fb.to_user(), false));
        assert!(fb.visible_to(UserId::new(), true));
        assert!(!fb.visible_to(UserId::new(), false));
    }

    #[test]
    fn hidden_entries_invisible_except_to_author() {
        let mut fb = entry();
        fb.moderate(ModerationStatus::Hidden);
        assert!(fb.visible_to(fb.from_user(), false));
        assert!(!fb.visible_to(fb.to_user(), false));
    }

    #[test]
    fn flagged_entries_remain_visible() {
        let mut fb = entry();
        fb.moderate(ModerationStatus::Flagged);
        assert!(fb.visible_to(fb.to_user(), false));
    }

    #[test]
    fn moderation_status_round_trips_through_str() {
        for s in [
            ModerationStatus::Active,
            ModerationStatus::Hidden,
            ModerationStatus::Flagged,
            ModerationStatus::Deleted,
        ] {
            assert_eq!(s.as_str().parse::<ModerationStatus>().unwrap(), s);
        }
    }
}
