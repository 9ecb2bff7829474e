//! Interval scheduler driving the recurring jobs.
//!
//! Each job gets its own tokio task ticking at its cadence. Job failures
//! are logged and the next tick proceeds.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::application::handlers::jobs::RecurringJob;
use crate::domain::foundation::Timestamp;

/// A set of jobs with their cadences, spawned together.
pub struct Scheduler {
    jobs: Vec<(Arc<dyn RecurringJob>, Duration)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self { jobs: Vec::new() }
    }

    /// Registers a job to run every `interval`.
    pub fn every(mut self, interval: Duration, job: Arc<dyn RecurringJob>) -> Self {
        self.jobs.push((job, interval));
        self
    }

    /// Spawns one tokio task per job. The first tick fires after one full
    /// interval, not at startup.
    pub fn spawn(self) -> Vec<JoinHandle<()>> {
        self.jobs
            .into_iter()
            .map(|(job, interval)| {
                tokio::spawn(async move {
                    let mut ticker = tokio::time::interval(interval);
                    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
                    ticker.tick().await;
                    loop {
                        ticker.tick().await;
                        let name = job.name();
                        tracing::debug!(job = name, "job tick");
                        if let Err(err) = job.run_once(Timestamp::now()).await {
                            tracing::warn!(job = name, error = %err, "job run failed");
                        }
                    }
                })
            })
            .collect()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
