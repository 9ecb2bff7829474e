//! Review template handlers: reusable question sets for cycles.

pub mod manage_templates;
pub mod queries;

#[cfg(test)]
pub(crate) mod test_support;

pub use manage_templates::{
    CreateTemplateCommand, CreateTemplateError, CreateTemplateHandler, DeleteTemplateHandler,
    TemplateQuestionInput,
};
pub use queries::{GetTemplateHandler, ListTemplatesHandler, TemplateQueryError};
