//! CreateCycleHandler - creates a draft review cycle.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::authorization::{authorize, Action, Resource};
use crate::domain::foundation::{DomainError, TemplateId, Timestamp};
use crate::domain::review_cycle::{CycleQuestion, CycleSettings, CycleType, ReviewCycle};
use crate::ports::{CycleRepository, TemplateRepository};

#[derive(Debug, Clone)]
pub struct CreateCycleCommand {
    pub name: String,
    pub cycle_type: CycleType,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub is_emergency: bool,
    pub settings: CycleSettings,
    pub questions: Vec<CycleQuestion>,
    /// Questions are copied from this template when none are given inline.
    pub template_id: Option<TemplateId>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateCycleError {
    #[error("template not found: {0}")]
    TemplateNotFound(TemplateId),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("{0}")]
    Validation(#[from] crate::domain::foundation::ValidationError),
}

pub struct CreateCycleHandler {
    cycles: Arc<dyn CycleRepository>,
    templates: Arc<dyn TemplateRepository>,
}

impl CreateCycleHandler {
    pub fn new(cycles: Arc<dyn CycleRepository>, templates: Arc<dyn TemplateRepository>) -> Self {
        Self { cycles, templates }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        cmd: CreateCycleCommand,
    ) -> Result<ReviewCycle, CreateCycleError> {
        authorize(caller.role, Resource::ReviewCycle, Action::Create)?;

        let questions = if cmd.questions.is_empty() {
            match cmd.template_id {
                Some(template_id) => self.questions_from_template(template_id).await?,
                None => Vec::new(),
            }
        } else {
            cmd.questions
        };

        let mut cycle = ReviewCycle::new(
            cmd.name,
            cmd.cycle_type,
            cmd.start_date,
            cmd.end_date,
            cmd.is_emergency,
            cmd.settings,
            caller.user_id,
        )?;
        if !questions.is_empty() {
            cycle.set_questions(questions)?;
        }

        self.cycles.save(&cycle).await?;
        tracing::info!(cycle_id = %cycle.id(), name = cycle.name(), "review cycle created");
        Ok(cycle)
    }

    async fn questions_from_template(
        &self,
        template_id: TemplateId,
    ) -> Result<Vec<CycleQuestion>, CreateCycleError> {
        let template = self
            .templates
            .find_by_id(template_id)
            .await?
            .ok_or(CreateCycleError::TemplateNotFound(template_id))?;

        let mut questions = Vec::with_capacity(template.questions().len());
        for q in template.questions() {
            let mut question = CycleQuestion::new(q.prompt.clone())?;
            question.category = q.category.clone();
            question.required = q.required;
            questions.push(question);
        }
        Ok(questions)
    }
}
