//! Urgent notifications for cycles ending within 24 hours.

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::handlers::notification::Notifier;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::notification::{Notification, NotificationKind, Priority};
use crate::domain::review_cycle::CycleStatus;
use crate::ports::{CycleRepository, NotificationRepository};

use super::RecurringJob;

pub struct UrgentDeadlineJob {
    cycles: Arc<dyn CycleRepository>,
    notifications: Arc<dyn NotificationRepository>,
    notifier: Arc<Notifier>,
}

impl UrgentDeadlineJob {
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
}

#[async_trait]
impl RecurringJob for UrgentDeadlineJob {
    fn name(&self) -> &'static str {
        "urgent_deadlines"
    }

    async fn run_once(&self, now: Timestamp) -> Result<(), DomainError> {
        let active = self.cycles.find_by_status(CycleStatus::Active).await?;
        let since = now.start_of_day();

        for cycle in &active {
            let hours_left = cycle.hours_until_end(now);
            if !(0..24).contains(&hours_left) {
                continue;
            }

            for participant in cycle.pending_participants() {
                let already_sent = self
                    .notifications
                    .exists_since(
                        participant.user_id,
                        NotificationKind::DeadlineUrgent,
                        cycle.id(),
                        since,
                    )
                    .await?;
                if already_sent {
                    continue;
                }

                let notification = Notification::new(
                    participant.user_id,
                    NotificationKind::DeadlineUrgent,
                    format!("Review closes in {} hour(s)", hours_left),
                    format!(
                        "\"{}\" closes in {} hour(s). Submit your review now.",
                        cycle.name(),
                        hours_left
                    ),
                    Priority::Urgent,
                )?
                .with_metadata("cycle_id", cycle.id().to_string());

                if let Err(err) = self.notifier.deliver(notification).await {
                    tracing::warn!(
                        cycle_id = %cycle.id(),
                        user_id = %participant.user_id,
                        error = %err,
                        "urgent deadline delivery failed"
                    );
                }
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
        CycleSettings, CycleType, ParticipantRole, ReviewCycle,
    };

    fn active_cycle(end: Timestamp, user: UserId) -> ReviewCycle {
        let mut cycle = ReviewCycle::new(
            "Emergency review",
            CycleType::Custom,
            end.minus_days(7),
            end,
            true,
            CycleSettings::default(),
            UserId::new(),
        )
        .unwrap();
        cycle
            .add_participant(user, ParticipantRole::Reviewee)
            .unwrap();
        cycle.transition(CycleStatus::Active).unwrap();
        cycle
    }

    fn job(
        cycles: Arc<MockCycleRepo>,
        notifications: Arc<RecordingNotifications>,
    ) -> UrgentDeadlineJob {
        UrgentDeadlineJob::new(
            cycles,
            notifications.clone(),
            notifier(notifications, None, RecordingEmail::new()),
        )
    }

    #[tokio::test]
    async fn notifies_at_urgent_priority_within_24_hours() {
        let now = Timestamp::now();
        let user = UserId::new();
        let cycles = MockCycleRepo::with(vec![active_cycle(now.plus_hours(6), user)]);
        let notifications = RecordingNotifications::new();

        let j = job(cycles, notifications.clone());
        j.run_once(now).await.unwrap();

        let all = notifications.all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].priority(), Priority::Urgent);
        assert_eq!(all[0].kind(), NotificationKind::DeadlineUrgent);
        assert!(all[0].title().contains("6 hour"));

        j.run_once(now.plus_hours(2)).await.unwrap();
        assert_eq!(notifications.all().len(), 1);
    }

    #[tokio::test]
    async fn far_deadlines_and_expired_cycles_are_skipped() {
        let now = Timestamp::now();
        let cycles = MockCycleRepo::with(vec![
            active_cycle(now.plus_days(2), UserId::new()),
            active_cycle(now.minus_days(1), UserId::new()),
        ]);
        let notifications = RecordingNotifications::new();

        job(cycles, notifications.clone()).run_once(now).await.unwrap();
        assert!(notifications.all().is_empty());
    }
}
