//! Recurring background jobs.
//!
//! Each job exposes `run_once(now)` so tests can trigger deterministic
//! ticks; the scheduler adapter drives them on interval timers.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp};

mod daily_reminders;
mod scheduled_flush;
#[cfg(test)]
pub(crate) mod test_support;
mod urgent_deadlines;

pub use daily_reminders::DailyReminderJob;
pub use scheduled_flush::ScheduledFlushJob;
pub use urgent_deadlines::UrgentDeadlineJob;

/// A background job the scheduler runs on a fixed cadence.
#[async_trait]
pub trait RecurringJob: Send + Sync {
    /// Name used in scheduler logs.
    fn name(&self) -> &'static str;

    /// One tick of the job, evaluated against `now`.
    async fn run_once(&self, now: Timestamp) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recurring_job_is_object_safe() {
        fn _accepts_dyn(_job: &dyn RecurringJob) {}
    }
}
