//! Template read handlers.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::authorization::{authorize, Action, Resource};
use crate::domain::foundation::{DomainError, TemplateId};
use crate::domain::review_template::ReviewTemplate;
use crate::ports::TemplateRepository;

#[derive(Debug, thiserror::Error)]
pub enum TemplateQueryError {
    #[error("template not found: {0}")]
    NotFound(TemplateId),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct GetTemplateHandler {
    templates: Arc<dyn TemplateRepository>,
}

impl GetTemplateHandler {
    pub fn new(templates: Arc<dyn TemplateRepository>) -> Self {
        Self { templates }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        id: TemplateId,
    ) -> Result<ReviewTemplate, TemplateQueryError> {
        authorize(caller.role, Resource::ReviewTemplate, Action::Read)?;
        self.templates
            .find_by_id(id)
            .await?
            .ok_or(TemplateQueryError::NotFound(id))
    }
}

pub struct ListTemplatesHandler {
    templates: Arc<dyn TemplateRepository>,
}

impl ListTemplatesHandler {
    pub fn new(templates: Arc<dyn TemplateRepository>) -> Self {
        Self { templates }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        page: u32,
        limit: u32,
    ) -> Result<Vec<ReviewTemplate>, TemplateQueryError> {
        authorize(caller.role, Resource::ReviewTemplate, Action::Read)?;
        let page = page.max(1);
        let limit = limit.clamp(1, 100);
        Ok(self.templates.list(page, limit).await?)
    }
}
