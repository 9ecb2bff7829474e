use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TemplateId, Timestamp, UserId, ValidationError};
use crate::domain::review_submission::ReviewType;

/// A question with flags for which review types it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateQuestion {
    pub prompt: String,
    pub category: Option<String>,
    pub required: bool,
    pub applies_to: Vec<ReviewType>,
}

impl TemplateQuestion {
    pub fn new(
        prompt: impl Into<String>,
        category: Option<String>,
        required: bool,
        applies_to: Vec<ReviewType>,
    ) -> Result<Self, ValidationError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ValidationError::empty_field("prompt"));
        }
        Ok(Self {
            prompt,
            category,
            required,
            applies_to,
        })
    }

    pub fn applies_to(&self, review_type: ReviewType) -> bool {
        self.applies_to.is_empty() || self.applies_to.contains(&review_type)
    }
}

/// A named, reusable set of review questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewTemplate {
    id: TemplateId,
    name: String,
    description: Option<String>,
    questions: Vec<TemplateQuestion>,
    created_by: UserId,
    created_at: Timestamp,
}

impl ReviewTemplate {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        questions: Vec<TemplateQuestion>,
        created_by: UserId,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }
        Ok(Self {
            id: TemplateId::new(),
            name,
            description,
            questions,
            created_by,
            created_at: Timestamp::now(),
        })
    }

    pub fn reconstitute(
        id: TemplateId,
        name: String,
        description: Option<String>,
        questions: Vec<TemplateQuestion>,
        created_by: UserId,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            description,
            questions,
            created_by,
            created_at,
        }
    }

    pub fn id(&self) -> TemplateId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn questions(&self) -> &[TemplateQuestion] {
        &self.questions
    }

    pub fn created_by(&self) -> UserId {
        self.created_by
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Questions applicable to one review type.
    pub fn questions_for(&self, review_type: ReviewType) -> Vec<&TemplateQuestion> {
        self.questions
            .iter()
            .filter(|q| q.applies_to(review_type))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(prompt: &str, applies_to: Vec<ReviewType>) -> TemplateQuestion {
        TemplateQuestion::new(prompt, None, true, applies_to).unwrap()
    }

    #[test]
    fn template_needs_name_and_questions() {
        assert!(ReviewTemplate::new("", None, vec![], UserId::new()).is_err());
        assert!(ReviewTemplate::new("Q3 standard", None, vec![], UserId::new()).is_err());
    }

    #[test]
    fn question_with_no_flags_applies_everywhere() {
        let q = question("What went well?", vec![]);
        assert!(q.applies_to(ReviewType::SelfReview));
        assert!(q.applies_to(ReviewType::Manager));
    }

    #[test]
    fn questions_for_filters_by_review_type() {
        let template = ReviewTemplate::new(
            "Q3 standard",
            None,
            vec![
                question("What went well?", vec![]),
                question("Rate collaboration", vec![ReviewType::Peer]),
                question("Growth areas for your report", vec![ReviewType::Manager]),
            ],
            UserId::new(),
        )
        .unwrap();

        assert_eq!(template.questions_for(ReviewType::Peer).len(), 2);
        assert_eq!(template.questions_for(ReviewType::Manager).len(), 2);
        assert_eq!(template.questions_for(ReviewType::Upward).len(), 1);
    }
}
