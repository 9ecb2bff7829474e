//! JSON request/response types for the review cycle endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::review_cycle::{
    CycleQuestion, CycleSettings, CycleStatus, CycleType, Participant, ReviewCycle,
};

fn default_true() -> bool {
    true
}

pub(crate) fn default_page() -> u32 {
    1
}

pub(crate) fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCycleRequest {
    pub name: String,
    pub cycle_type: CycleType,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub is_emergency: bool,
    #[serde(default)]
    pub settings: CycleSettings,
    #[serde(default)]
    pub questions: Vec<QuestionRequest>,
    /// Template to copy questions from when none are given inline.
    pub template_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRequest {
    pub prompt: String,
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub required: bool,
}

impl QuestionRequest {
    pub fn into_question(self) -> Result<CycleQuestion, crate::domain::foundation::ValidationError>
    {
        let mut question = CycleQuestion::new(self.prompt)?;
        question.category = self.category;
        question.required = self.required;
        Ok(question)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransitionRequest {
    pub target: CycleStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddParticipantsRequest {
    pub participants: Vec<ParticipantRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantRequest {
    pub user_id: String,
    pub role: crate::domain::review_cycle::ParticipantRole,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListCyclesParams {
    pub status: Option<CycleStatus>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CycleResponse {
    pub id: String,
    pub name: String,
    pub cycle_type: CycleType,
    pub status: CycleStatus,
    pub start_date: String,
    pub end_date: String,
    pub is_emergency: bool,
    pub settings: CycleSettings,
    pub participants: Vec<Participant>,
    pub questions: Vec<CycleQuestion>,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&ReviewCycle> for CycleResponse {
    fn from(cycle: &ReviewCycle) -> Self {
        Self {
            id: cycle.id().to_string(),
            name: cycle.name().to_string(),
            cycle_type: cycle.cycle_type(),
            status: cycle.status(),
            start_date: cycle.start_date().to_rfc3339(),
            end_date: cycle.end_date().to_rfc3339(),
            is_emergency: cycle.is_emergency(),
            settings: cycle.settings().clone(),
            participants: cycle.participants().to_vec(),
            questions: cycle.questions().to_vec(),
            created_by: cycle.created_by().to_string(),
            created_at: cycle.created_at().to_rfc3339(),
            updated_at: cycle.updated_at().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_cycle_request_deserializes_with_defaults() {
        let json = r#"{
            "name": "Q3 2025",
            "cycle_type": "quarterly",
            "start_date": "2025-07-01T00:00:00Z",
            "end_date": "2025-09-30T00:00:00Z"
        }"#;
        let req: CreateCycleRequest = serde_json::from_str(json).unwrap();
        assert!(!req.is_emergency);
        assert_eq!(req.settings.grace_period_days, 3);
        assert!(req.questions.is_empty());
    }

    #[test]
    fn question_request_defaults_to_required() {
        let json = r#"{"prompt": "What went well?"}"#;
        let req: QuestionRequest = serde_json::from_str(json).unwrap();
        let question = req.into_question().unwrap();
        assert!(question.required);
    }

    #[test]
    fn empty_question_prompt_is_rejected() {
        let req = QuestionRequest {
            prompt: "  ".to_string(),
            category: None,
            required: true,
        };
        assert!(req.into_question().is_err());
    }
}
