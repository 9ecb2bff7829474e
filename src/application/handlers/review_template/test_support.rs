//! In-memory template repository for handler and route tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::{DomainError, TemplateId, UserId};
use crate::domain::review_template::{ReviewTemplate, TemplateQuestion};
use crate::ports::TemplateRepository;

pub(crate) struct MockTemplateRepo {
    templates: Mutex<Vec<ReviewTemplate>>,
}

impl MockTemplateRepo {
    pub(crate) fn new() -> Self {
        Self {
            templates: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with(templates: Vec<ReviewTemplate>) -> Arc<Self> {
        Arc::new(Self {
            templates: Mutex::new(templates),
        })
    }

    pub(crate) fn all(&self) -> Vec<ReviewTemplate> {
        self.templates.lock().unwrap().clone()
    }
}

#[async_trait]
impl TemplateRepository for MockTemplateRepo {
    async fn save(&self, template: &ReviewTemplate) -> Result<(), DomainError> {
        self.templates.lock().unwrap().push(template.clone());
        Ok(())
    }

    async fn update(&self, template: &ReviewTemplate) -> Result<(), DomainError> {
        let mut templates = self.templates.lock().unwrap();
        if let Some(slot) = templates.iter_mut().find(|t| t.id() == template.id()) {
            *slot = template.clone();
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TemplateId) -> Result<Option<ReviewTemplate>, DomainError> {
        Ok(self
            .templates
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn list(&self, page: u32, limit: u32) -> Result<Vec<ReviewTemplate>, DomainError> {
        let templates = self.templates.lock().unwrap();
        let skip = ((page - 1) * limit) as usize;
        Ok(templates
            .iter()
            .skip(skip)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: TemplateId) -> Result<(), DomainError> {
        self.templates.lock().unwrap().retain(|t| t.id() != id);
        Ok(())
    }
}

pub(crate) fn sample_template() -> ReviewTemplate {
    ReviewTemplate::new(
        "Quarterly standard",
        None,
        vec![TemplateQuestion::new("What went well?", None, true, vec![]).unwrap()],
        UserId::new(),
    )
    .unwrap()
}
