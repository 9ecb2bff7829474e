//! Reusable question templates for review cycles.

mod template;

pub use template::{ReviewTemplate, TemplateQuestion};
