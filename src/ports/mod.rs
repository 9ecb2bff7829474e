//! Ports - interfaces between the domain and the outside world.
//!
//! Following hexagonal architecture, adapters implement these contracts:
//! repositories over PostgreSQL, the cache over Redis or memory, the AI
//! provider over HTTP, and the email sender over SMTP.

mod ai_provider;
mod analytics_reader;
mod cache;
mod clock;
mod cycle_repository;
mod email_sender;
mod feedback_repository;
mod notification_repository;
mod okr_repository;
mod org_repository;
mod submission_repository;
mod template_repository;
mod time_entry_repository;
mod user_repository;

pub use ai_provider::{AiCompletion, AiError, AiProvider, AiRequest};
pub use analytics_reader::AnalyticsReader;
pub use cache::Cache;
pub use clock::{Clock, SystemClock};
pub use cycle_repository::CycleRepository;
pub use email_sender::{EmailMessage, EmailSender};
pub use feedback_repository::{FeedbackFilter, FeedbackRepository};
pub use notification_repository::NotificationRepository;
pub use okr_repository::{OkrFilter, OkrRepository};
pub use org_repository::OrgRepository;
pub use submission_repository::SubmissionRepository;
pub use template_repository::TemplateRepository;
pub use time_entry_repository::TimeEntryRepository;
pub use user_repository::UserRepository;
