//! Review template repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TemplateId};
use crate::domain::review_template::ReviewTemplate;

/// Repository port for ReviewTemplate persistence.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn save(&self, template: &ReviewTemplate) -> Result<(), DomainError>;

    async fn update(&self, template: &ReviewTemplate) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: TemplateId) -> Result<Option<ReviewTemplate>, DomainError>;

    async fn list(&self, page: u32, limit: u32) -> Result<Vec<ReviewTemplate>, DomainError>;

    async fn delete(&self, id: TemplateId) -> Result<(), DomainError>;
}
