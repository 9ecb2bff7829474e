//! Daily review reminders at the 7, 3, and 1 day marks.

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::handlers::notification::Notifier;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::notification::{Notification, NotificationKind, Priority};
use crate::domain::review_cycle::{CycleStatus, ReviewCycle};
use crate::ports::{CycleRepository, NotificationRepository};

use super::RecurringJob;

const REMINDER_DAYS: [i64; 3] = [7, 3, 1];

/// Reminds pending participants of active cycles as the deadline nears.
///
/// The existing-notification guard keys on (user, kind, cycle, same day),
/// so re-running the job within one day creates nothing new.
pub struct DailyReminderJob {
    cycles: Arc<dyn CycleRepository>,
    notifications: Arc<dyn NotificationRepository>,
    notifier: Arc<Notifier>,
}

impl DailyReminderJob {
    pub fn new(
        cycles: Arc<dyn CycleRepository>,
        notifications: Arc<dyn NotificationRepository>,
        notifier: Arc<Notifier>,
    ) -> Self {
        Self {
            cycles,
            notifications,
            notifier,
        }
    }

    async fn remind_cycle(&self, cycle: &ReviewCycle, now: Timestamp) -> Result<(), DomainError> {
        let days_left = cycle.days_until_end(now);
        if !REMINDER_DAYS.contains(&days_left) {
            return Ok(());
        }

        let since = now.start_of_day();
        for participant in cycle.pending_participants() {
            let already_sent = self
                .notifications
                .exists_since(
                    participant.user_id,
                    NotificationKind::ReviewReminder,
                    cycle.id(),
                    since,
                )
                .await?;
            if already_sent {
                continue;
            }

            let priority = if days_left <= 1 {
                Priority::High
            } else {
                Priority::Normal
            };
            let notification = Notification::new(
                participant.user_id,
                NotificationKind::ReviewReminder,
                format!("Review due in {} day(s)", days_left),
                format!(
                    "Your review for \"{}\" is due in {} day(s). Submit it before {}.",
                    cycle.name(),
                    days_left,
                    cycle.end_date()
                ),
                priority,
            )?
            .with_metadata("cycle_id", cycle.id().to_string());

            if let Err(err) = self.notifier.deliver(notification).await {
                tracing::warn!(
                    cycle_id = %cycle.id(),
                    user_id = %participant.user_id,
                    error = %err,
                    "reminder delivery failed"
                );
            }
        }
        Ok(())
    }
}

#[async_trait]
impl RecurringJob for DailyReminderJob {
    fn name(&self) -> &'static str {
        "daily_reminders"
    }

    async fn run_once(&self, now: Timestamp) -> Result<(), DomainError> {
        let active = self.cycles.find_by_status(CycleStatus::Active).await?;
        for cycle in &active {
            if let Err(err) = self.remind_cycle(cycle, now).await {
                tracing::warn!(cycle_id = %cycle.id(), error = %err, "reminder pass failed for cycle");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::jobs::test_support::{
        notifier, RecordingEmail, RecordingNotifications,
    };
    use crate::application::handlers::review_cycle::test_support::MockCycleRepo;
    use crate::domain::foundation::UserId;
    use crate::domain::review_cycle::{
        CycleSettings, CycleType, ParticipantRole, ParticipantStatus,
    };

    fn active_cycle(end: Timestamp, participants: &[UserId]) -> ReviewCycle {
        let mut cycle = ReviewCycle::new(
            "Q3 2026",
            CycleType::Quarterly,
            end.minus_days(30),
            end,
            true,
            CycleSettings::default(),
            UserId::new(),
        )
        .unwrap();
        for user in participants {
            cycle
                .add_participant(*user, ParticipantRole::Reviewee)
                .unwrap();
        }
        cycle.transition(CycleStatus::Active).unwrap();
        cycle
    }

    fn job(
        cycles: Arc<MockCycleRepo>,
        notifications: Arc<RecordingNotifications>,
    ) -> DailyReminderJob {
        DailyReminderJob::new(
            cycles,
            notifications.clone(),
            notifier(notifications, None, RecordingEmail::new()),
        )
    }

    #[tokio::test]
    async fn reminds_each_pending_participant_once() {
        let now = Timestamp::now();
        let users = [UserId::new(), UserId::new()];
        // An extra hour so the floored day count stays at 3 during the test.
        let cycle = active_cycle(now.plus_days(3).plus_hours(1), &users);
        let cycles = MockCycleRepo::with(vec![cycle]);
        let notifications = RecordingNotifications::new();

        let j = job(cycles, notifications.clone());
        j.run_once(now).await.unwrap();
        assert_eq!(notifications.all().len(), 2);

        // Same day, second tick: the guard suppresses duplicates.
        j.run_once(now.plus_hours(1)).await.unwrap();
        assert_eq!(notifications.all().len(), 2);
    }

    #[tokio::test]
    async fn skips_cycles_outside_reminder_days() {
        let now = Timestamp::now();
        let cycle = active_cycle(now.plus_days(5).plus_hours(1), &[UserId::new()]);
        let cycles = MockCycleRepo::with(vec![cycle]);
        let notifications = RecordingNotifications::new();

        job(cycles, notifications.clone()).run_once(now).await.unwrap();
        assert!(notifications.all().is_empty());
    }

    #[tokio::test]
    async fn submitted_participants_are_not_reminded() {
        let now = Timestamp::now();
        let done = UserId::new();
        let pending = UserId::new();
        let mut cycle = active_cycle(now.plus_days(1).plus_hours(1), &[done, pending]);
        cycle
            .set_participant_status(done, ParticipantStatus::Submitted)
            .unwrap();
        let cycles = MockCycleRepo::with(vec![cycle]);
        let notifications = RecordingNotifications::new();

        job(cycles, notifications.clone()).run_once(now).await.unwrap();
        let all = notifications.all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].user_id(), pending);
        assert_eq!(all[0].priority(), Priority::High);
    }
}
