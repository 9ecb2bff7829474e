//! JSON request/response types for the review template endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::review_template::TemplateQuestionInput;
use crate::domain::review_submission::ReviewType;
use crate::domain::review_template::{ReviewTemplate, TemplateQuestion};

use super::super::cycles::dto::{default_limit, default_page};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTemplateRequest {
    pub name: String,
    pub description: Option<String>,
    pub questions: Vec<TemplateQuestionRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateQuestionRequest {
    pub prompt: String,
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub required: bool,
    /// Empty means the question applies to every review type.
    #[serde(default)]
    pub applies_to: Vec<ReviewType>,
}

impl TemplateQuestionRequest {
    pub fn into_input(self) -> TemplateQuestionInput {
        TemplateQuestionInput {
            prompt: self.prompt,
            category: self.category,
            required: self.required,
            applies_to: self.applies_to,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListTemplatesParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<TemplateQuestion>,
    pub created_by: String,
    pub created_at: String,
}

impl From<&ReviewTemplate> for TemplateResponse {
    fn from(template: &ReviewTemplate) -> Self {
        Self {
            id: template.id().to_string(),
            name: template.name().to_string(),
            description: template.description().map(str::to_string),
            questions: template.questions().to_vec(),
            created_by: template.created_by().to_string(),
            created_at: template.created_at().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_request_defaults_apply_everywhere() {
        let json = r#"{"prompt": "Rate collaboration"}"#;
        let req: TemplateQuestionRequest = serde_json::from_str(json).unwrap();
        assert!(req.required);
        assert!(req.applies_to.is_empty());
    }

    #[test]
    fn applies_to_accepts_wire_names() {
        let json = r#"{"prompt": "Rate collaboration", "applies_to": ["peer", "self"]}"#;
        let req: TemplateQuestionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            req.applies_to,
            vec![ReviewType::Peer, ReviewType::SelfReview]
        );
    }
}
