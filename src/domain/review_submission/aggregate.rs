//! ReviewSubmission aggregate root.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    CycleId, RatingValue, StateMachine, SubmissionId, Timestamp, UserId, ValidationError,
};
use crate::domain::review_cycle::CycleQuestion;

use super::status::SubmissionStatus;

/// Direction of a review relative to the reviewee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewType {
    #[serde(rename = "self")]
    SelfReview,
    Peer,
    Manager,
    Upward,
}

impl ReviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewType::SelfReview => "self",
            ReviewType::Peer => "peer",
            ReviewType::Manager => "manager",
            ReviewType::Upward => "upward",
        }
    }
}

impl fmt::Display for ReviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReviewType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "self" => Ok(ReviewType::SelfReview),
            "peer" => Ok(ReviewType::Peer),
            "manager" => Ok(ReviewType::Manager),
            "upward" => Ok(ReviewType::Upward),
            other => Err(ValidationError::invalid_format(
                "review_type",
                format!("unknown review type: {}", other),
            )),
        }
    }
}

/// The uniqueness tuple: one submission per
/// (cycle, reviewee, reviewer, review type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionKey {
    pub cycle_id: CycleId,
    pub reviewee_id: UserId,
    pub reviewer_id: UserId,
    pub review_type: ReviewType,
}

/// One answered (or blank) question in a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEntry {
    pub question: String,
    pub answer: String,
    pub rating: Option<RatingValue>,
}

impl ResponseEntry {
    /// Blank response seeded from a cycle question.
    pub fn from_question(question: &CycleQuestion) -> Self {
        Self {
            question: question.prompt.clone(),
            answer: String::new(),
            rating: None,
        }
    }
}

/// AI-generated draft text attached to a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSuggestion {
    pub text: String,
    pub provider: String,
    pub generated_at: Timestamp,
}

/// AI-computed score attached to a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiScoreCard {
    pub final_score: f64,
    pub components: serde_json::Value,
    pub computed_at: Timestamp,
}

/// Fields a reviewer may edit while the submission is a draft.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftFields {
    pub responses: Option<Vec<ResponseEntry>>,
    pub overall_rating: Option<RatingValue>,
    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub goals: Option<String>,
    pub comments: Option<String>,
}

/// One reviewer's in-progress or completed review of one reviewee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSubmission {
    id: SubmissionId,
    key: SubmissionKey,
    status: SubmissionStatus,
    responses: Vec<ResponseEntry>,
    overall_rating: Option<RatingValue>,
    strengths: Option<String>,
    areas_for_improvement: Option<String>,
    goals: Option<String>,
    comments: Option<String>,
    ai_suggestion: Option<AiSuggestion>,
    ai_score: Option<AiScoreCard>,
    submitted_at: Option<Timestamp>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ReviewSubmission {
    /// Creates a draft submission, responses pre-populated from the cycle's
    /// questions with empty answers.
    pub fn new(key: SubmissionKey, questions: &[CycleQuestion]) -> Self {
        let now = Timestamp::now();
        Self {
            id: SubmissionId::new(),
            key,
            status: SubmissionStatus::Draft,
            responses: questions.iter().map(ResponseEntry::from_question).collect(),
            overall_rating: None,
            strengths: None,
            areas_for_improvement: None,
            goals: None,
            comments: None,
            ai_suggestion: None,
            ai_score: None,
            submitted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a submission from persisted state.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SubmissionId,
        key: SubmissionKey,
        status: SubmissionStatus,
        responses: Vec<ResponseEntry>,
        overall_rating: Option<RatingValue>,
        strengths: Option<String>,
        areas_for_improvement: Option<String>,
        goals: Option<String>,
        comments: Option<String>,
        ai_suggestion: Option<AiSuggestion>,
        ai_score: Option<AiScoreCard>,
        submitted_at: Option<Timestamp>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            key,
            status,
            responses,
            overall_rating,
            strengths,
            areas_for_improvement,
            goals,
            comments,
            ai_suggestion,
            ai_score,
            submitted_at,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn key(&self) -> &SubmissionKey {
        &self.key
    }

    pub fn cycle_id(&self) -> CycleId {
        self.key.cycle_id
    }

    pub fn reviewer_id(&self) -> UserId {
        self.key.reviewer_id
    }

    pub fn reviewee_id(&self) -> UserId {
        self.key.reviewee_id
    }

    pub fn review_type(&self) -> ReviewType {
        self.key.review_type
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn responses(&self) -> &[ResponseEntry] {
        &self.responses
    }

    pub fn overall_rating(&self) -> Option<RatingValue> {
        self.overall_rating
    }

    pub fn strengths(&self) -> Option<&str> {
        self.strengths.as_deref()
    }

    pub fn areas_for_improvement(&self) -> Option<&str> {
        self.areas_for_improvement.as_deref()
    }

    pub fn goals(&self) -> Option<&str> {
        self.goals.as_deref()
    }

    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }

    pub fn ai_suggestion(&self) -> Option<&AiSuggestion> {
        self.ai_suggestion.as_ref()
    }

    pub fn ai_score(&self) -> Option<&AiScoreCard> {
        self.ai_score.as_ref()
    }

    pub fn submitted_at(&self) -> Option<Timestamp> {
        self.submitted_at
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Applies draft edits. Rejected once the submission has been submitted.
    pub fn apply_draft(&mut self, fields: DraftFields) -> Result<(), ValidationError> {
        if !self.status.is_editable() {
            return Err(ValidationError::invalid_format(
                "status",
                format!("submission is {} and can no longer be edited", self.status),
            ));
        }
        if let Some(responses) = fields.responses {
            self.responses = responses;
        }
        if let Some(rating) = fields.overall_rating {
            self.overall_rating = Some(rating);
        }
        if let Some(strengths) = fields.strengths {
            self.strengths = Some(strengths);
        }
        if let Some(areas) = fields.areas_for_improvement {
            self.areas_for_improvement = Some(areas);
        }
        if let Some(goals) = fields.goals {
            self.goals = Some(goals);
        }
        if let Some(comments) = fields.comments {
            self.comments = Some(comments);
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Finalizes the submission, stamping `submitted_at` and freezing content.
    pub fn submit(&mut self) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(SubmissionStatus::Submitted)?;
        let now = Timestamp::now();
        self.submitted_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    /// Marks the submission as reviewed by HR/management.
    pub fn mark_reviewed(&mut self) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(SubmissionStatus::Reviewed)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Attaches an AI-generated draft. Allowed regardless of status since
    /// suggestions never alter reviewer content.
    pub fn attach_suggestion(&mut self, suggestion: AiSuggestion) {
        self.ai_suggestion = Some(suggestion);
        self.updated_at = Timestamp::now();
    }

    /// Attaches a computed AI score card.
    pub fn attach_score(&mut self, score: AiScoreCard) {
        self.ai_score = Some(score);
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SubmissionKey {
        SubmissionKey {
            cycle_id: CycleId::new(),
            reviewee_id: UserId::new(),
            reviewer_id: UserId::new(),
            review_type: ReviewType::Peer,
        }
    }

    fn questions() -> Vec<CycleQuestion> {
        vec![
            CycleQuestion::new("What went well?").unwrap(),
            CycleQuestion::new("What could improve?").unwrap(),
        ]
    }

    #[test]
    fn new_submission_is_draft_with_blank_responses() {
        let sub = ReviewSubmission::new(key(), &questions());
        assert_eq!(sub.status(), SubmissionStatus::Draft);
        assert_eq!(sub.responses().len(), 2);
        assert!(sub.responses().iter().all(|r| r.answer.is_empty()));
        assert!(sub.submitted_at().is_none());
    }

    #[test]
    fn draft_edits_apply() {
        let mut sub = ReviewSubmission::new(key(), &questions());
        sub.apply_draft(DraftFields {
            strengths: Some("Ships reliably".to_string()),
            overall_rating: Some(RatingValue::new(4).unwrap()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(sub.strengths(), Some("Ships reliably"));
        assert_eq!(sub.overall_rating().unwrap().value(), 4);
    }

    #[test]
    fn submit_stamps_timestamp_and_freezes() {
        let mut sub = ReviewSubmission::new(key(), &questions());
        sub.submit().unwrap();

        assert_eq!(sub.status(), SubmissionStatus::Submitted);
        assert!(sub.submitted_at().is_some());

        let result = sub.apply_draft(DraftFields {
            comments: Some("sneaky edit".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
        assert!(sub.comments().is_none());
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut sub = ReviewSubmission::new(key(), &questions());
        sub.submit().unwrap();
        assert!(sub.submit().is_err());
    }

    #[test]
    fn reviewed_follows_submitted() {
        let mut sub = ReviewSubmission::new(key(), &questions());
        assert!(sub.mark_reviewed().is_err());
        sub.submit().unwrap();
        sub.mark_reviewed().unwrap();
        assert_eq!(sub.status(), SubmissionStatus::Reviewed);
    }

    #[test]
    fn suggestion_attaches_even_after_submit() {
        let mut sub = ReviewSubmission::new(key(), &questions());
        sub.submit().unwrap();
        sub.attach_suggestion(AiSuggestion {
            text: "Consider highlighting collaboration".to_string(),
            provider: "openai".to_string(),
            generated_at: Timestamp::now(),
        });
        assert!(sub.ai_suggestion().is_some());
    }

    #[test]
    fn review_type_round_trips_through_str() {
        for rt in [
            ReviewType::SelfReview,
            ReviewType::Peer,
            ReviewType::Manager,
            ReviewType::Upward,
        ] {
            assert_eq!(rt.as_str().parse::<ReviewType>().unwrap(), rt);
        }
    }

    #[test]
    fn self_review_type_uses_self_string() {
        assert_eq!(ReviewType::SelfReview.as_str(), "self");
    }
}
