//! CreateFeedbackHandler - records feedback, classifies sentiment, and
//! notifies the recipient.

use std::sync::Arc;

use crate::application::handlers::notification::Notifier;
use crate::application::Caller;
use crate::domain::feedback::{Feedback, Sentiment};
use crate::domain::foundation::{DomainError, RatingValue, UserId};
use crate::domain::notification::{NotificationKind, Priority};
use crate::domain::scoring::classify_sentiment_keywords;
use crate::ports::{AiProvider, AiRequest, FeedbackRepository};

#[derive(Debug, Clone)]
pub struct CreateFeedbackCommand {
    pub to_user: UserId,
    pub content: String,
    pub rating: Option<RatingValue>,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateFeedbackError {
    #[error("{0}")]
    Validation(#[from] crate::domain::foundation::ValidationError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct CreateFeedbackHandler {
    feedback: Arc<dyn FeedbackRepository>,
    ai: Arc<dyn AiProvider>,
    notifier: Arc<Notifier>,
}

impl CreateFeedbackHandler {
    pub fn new(
        feedback: Arc<dyn FeedbackRepository>,
        ai: Arc<dyn AiProvider>,
        notifier: Arc<Notifier>,
    ) -> Self {
        Self {
            feedback,
            ai,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        cmd: CreateFeedbackCommand,
    ) -> Result<Feedback, CreateFeedbackError> {
        let sentiment = self.classify(&cmd.content).await;
        let feedback = Feedback::new(
            caller.user_id,
            cmd.to_user,
            cmd.content,
            cmd.rating,
            cmd.category,
            cmd.tags,
            sentiment,
        )?;
        self.feedback.save(&feedback).await?;

        // Recipient notification is best-effort.
        if let Err(err) = self
            .notifier
            .notify(
                cmd.to_user,
                NotificationKind::FeedbackReceived,
                "You received new feedback",
                "A colleague left you feedback. Open your feedback page to read it.",
                Priority::Normal,
            )
            .await
        {
            tracing::warn!(feedback_id = %feedback.id(), error = %err, "feedback notification failed");
        }

        Ok(feedback)
    }

    /// AI classification with the keyword word-list as fallback.
    async fn classify(&self, content: &str) -> Sentiment {
        let request = AiRequest::new(format!(
            "Classify the sentiment of this workplace feedback as exactly one word, \
             positive, neutral, or negative:\n\n{}",
            content
        ))
        .with_max_tokens(4)
        .with_temperature(0.0);

        match self.ai.complete(request).await {
            Ok(completion) => completion
                .content
                .trim()
                .to_lowercase()
                .parse()
                .unwrap_or_else(|_| classify_sentiment_keywords(content)),
            Err(err) => {
                tracing::warn!(error = %err, "sentiment classification fell back to keywords");
                classify_sentiment_keywords(content)
            }
        }
    }
}
