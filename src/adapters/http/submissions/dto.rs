//! JSON request/response types for the review submission endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RatingValue, ValidationError};
use crate::domain::review_submission::{
    AiScoreCard, AiSuggestion, DraftFields, ResponseEntry, ReviewSubmission, ReviewType,
    SubmissionStatus,
};

#[derive(Debug, Clone, Deserialize)]
pub struct SaveDraftRequest {
    pub cycle_id: String,
    pub reviewee_id: String,
    pub review_type: ReviewType,
    pub responses: Option<Vec<ResponseEntryRequest>>,
    pub overall_rating: Option<u8>,
    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub goals: Option<String>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEntryRequest {
    pub question: String,
    pub answer: String,
    pub rating: Option<u8>,
}

impl ResponseEntryRequest {
    fn into_entry(self) -> Result<ResponseEntry, ValidationError> {
        let rating = self.rating.map(RatingValue::new).transpose()?;
        Ok(ResponseEntry {
            question: self.question,
            answer: self.answer,
            rating,
        })
    }
}

impl SaveDraftRequest {
    pub fn draft_fields(self) -> Result<DraftFields, ValidationError> {
        let responses = self
            .responses
            .map(|entries| {
                entries
                    .into_iter()
                    .map(|e| e.into_entry())
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        let overall_rating = self.overall_rating.map(RatingValue::new).transpose()?;

        Ok(DraftFields {
            responses,
            overall_rating,
            strengths: self.strengths,
            areas_for_improvement: self.areas_for_improvement,
            goals: self.goals,
            comments: self.comments,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NominatePeersRequest {
    pub reviewee_id: String,
    pub peer_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub id: String,
    pub cycle_id: String,
    pub reviewee_id: String,
    pub reviewer_id: String,
    pub review_type: ReviewType,
    pub status: SubmissionStatus,
    pub responses: Vec<ResponseEntry>,
    pub overall_rating: Option<u8>,
    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub goals: Option<String>,
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_suggestion: Option<AiSuggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_score: Option<AiScoreCard>,
    pub submitted_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&ReviewSubmission> for SubmissionResponse {
    fn from(submission: &ReviewSubmission) -> Self {
        Self {
            id: submission.id().to_string(),
            cycle_id: submission.cycle_id().to_string(),
            reviewee_id: submission.reviewee_id().to_string(),
            reviewer_id: submission.reviewer_id().to_string(),
            review_type: submission.review_type(),
            status: submission.status(),
            responses: submission.responses().to_vec(),
            overall_rating: submission.overall_rating().map(|r| r.value()),
            strengths: submission.strengths().map(String::from),
            areas_for_improvement: submission.areas_for_improvement().map(String::from),
            goals: submission.goals().map(String::from),
            comments: submission.comments().map(String::from),
            ai_suggestion: submission.ai_suggestion().cloned(),
            ai_score: submission.ai_score().cloned(),
            submitted_at: submission.submitted_at().map(|t| t.to_rfc3339()),
            created_at: submission.created_at().to_rfc3339(),
            updated_at: submission.updated_at().to_rfc3339(),
        }
    }
}
