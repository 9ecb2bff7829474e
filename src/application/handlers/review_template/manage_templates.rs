//! Template write handlers: create and delete.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::authorization::{authorize, Action, Resource};
use crate::domain::foundation::{DomainError, TemplateId};
use crate::domain::review_submission::ReviewType;
use crate::domain::review_template::{ReviewTemplate, TemplateQuestion};
use crate::ports::TemplateRepository;

#[derive(Debug, Clone)]
pub struct TemplateQuestionInput {
    pub prompt: String,
    pub category: Option<String>,
    pub required: bool,
    pub applies_to: Vec<ReviewType>,
}

#[derive(Debug, Clone)]
pub struct CreateTemplateCommand {
    pub name: String,
    pub description: Option<String>,
    pub questions: Vec<TemplateQuestionInput>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateTemplateError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("{0}")]
    Validation(#[from] crate::domain::foundation::ValidationError),
}

pub struct CreateTemplateHandler {
    templates: Arc<dyn TemplateRepository>,
}

impl CreateTemplateHandler {
    pub fn new(templates: Arc<dyn TemplateRepository>) -> Self {
        Self { templates }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        cmd: CreateTemplateCommand,
    ) -> Result<ReviewTemplate, CreateTemplateError> {
        authorize(caller.role, Resource::ReviewTemplate, Action::Create)?;

        let questions = cmd
            .questions
            .into_iter()
            .map(|q| TemplateQuestion::new(q.prompt, q.category, q.required, q.applies_to))
            .collect::<Result<Vec<_>, _>>()?;

        let template =
            ReviewTemplate::new(cmd.name, cmd.description, questions, caller.user_id)?;
        self.templates.save(&template).await?;
        tracing::info!(template_id = %template.id(), name = template.name(), "review template created");
        Ok(template)
    }
}

pub struct DeleteTemplateHandler {
    templates: Arc<dyn TemplateRepository>,
}

impl DeleteTemplateHandler {
    pub fn new(templates: Arc<dyn TemplateRepository>) -> Self {
        Self { templates }
    }

    pub async fn handle(&self, caller: Caller, id: TemplateId) -> Result<(), DomainError> {
        authorize(caller.role, Resource::ReviewTemplate, Action::Delete)?;
        self.templates.delete(id).await?;
        tracing::info!(template_id = %id, "review template deleted");
        Ok(())
    }
}
