//! Daily scheduler.
//!
//! A single spawned task polls a [`Clock`] every `poll_interval` and runs a
//! [`ScheduledJob`] once the wall-clock time passes the next scheduled run.
//! The loop listens on a channel alongside its timer, so a [`Stopper`] can
//! end it cleanly between ticks.
//!
//! - Runs never overlap; the job is awaited inside the loop.
//! - The next run is computed from the time a run finished, so a day the
//!   process was not running is skipped, not backfilled.
//! - Nothing is persisted across restarts.
//! - A failing job ends the loop and its error is returned from
//!   [`SchedulerHandle::wait`].

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::pipeline;
use chrono::{Days, Local, NaiveDateTime, NaiveTime};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

/// Source of "now" for the scheduler.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A task the scheduler can run.
pub trait ScheduledJob: Send + 'static {
    /// The job name (used for logging)
    fn name(&self) -> &'static str;

    /// Run the job once.
    fn execute(&mut self) -> impl Future<Output = Result<()>> + Send;
}

/// Shortest gap between clock checks; smaller intervals are raised to it.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// When to run and how often to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    /// Local time of day of the run.
    pub at: NaiveTime,
    /// Gap between clock checks, never below [`MIN_POLL_INTERVAL`] once
    /// the loop runs.
    pub poll_interval: Duration,
}

impl DailySchedule {
    /// `poll_interval` is raised to [`MIN_POLL_INTERVAL`] if smaller.
    pub fn new(at: NaiveTime, poll_interval: Duration) -> Self {
        Self {
            at,
            poll_interval: poll_interval.max(MIN_POLL_INTERVAL),
        }
    }

    /// Every day at 00:00, checked once per second.
    pub fn midnight() -> Self {
        Self::new(NaiveTime::MIN, Duration::from_secs(1))
    }

    /// The first run strictly after `now`: today if `at` is still ahead,
    /// otherwise tomorrow.
    pub fn next_run_after(&self, now: NaiveDateTime) -> NaiveDateTime {
        let today = now.date().and_time(self.at);
        if now < today {
            today
        } else {
            today
                .checked_add_days(Days::new(1))
                .unwrap_or(NaiveDateTime::MAX)
        }
    }
}

impl Default for DailySchedule {
    fn default() -> Self {
        Self::midnight()
    }
}

enum SchedulerMessage {
    Shutdown,
}

/// Cloneable handle that asks the scheduler loop to stop.
#[derive(Clone)]
pub struct Stopper {
    sender: mpsc::Sender<SchedulerMessage>,
}

impl Stopper {
    /// Signal the loop to stop. A loop that already ended is ignored.
    pub async fn stop(&self) {
        let _ = self.sender.send(SchedulerMessage::Shutdown).await;
    }
}

/// Owner of a running scheduler loop.
pub struct SchedulerHandle {
    stopper: Stopper,
    task: JoinHandle<Result<()>>,
}

impl SchedulerHandle {
    pub fn stopper(&self) -> Stopper {
        self.stopper.clone()
    }

    /// Wait for the loop to end, either through a [`Stopper`] or a failed job.
    pub async fn wait(self) -> Result<()> {
        self.task.await?
    }

    /// Stop the loop and wait for it.
    pub async fn shutdown(self) -> Result<()> {
        self.stopper.stop().await;
        self.wait().await
    }
}

/// Spawn the scheduler loop on the current runtime.
pub fn spawn_daily<J, C>(mut job: J, schedule: DailySchedule, clock: C) -> SchedulerHandle
where
    J: ScheduledJob,
    C: Clock,
{
    let (sender, mut receiver) = mpsc::channel(8);
    let mut next_run = schedule.next_run_after(clock.now());

    let task = tokio::spawn(async move {
        info!(job = job.name(), %next_run, "Scheduler started");

        let mut timer = tokio::time::interval(schedule.poll_interval.max(MIN_POLL_INTERVAL));
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = timer.tick() => {
                    if clock.now() < next_run {
                        continue;
                    }
                    info!(job = job.name(), "Running scheduled job");
                    if let Err(e) = job.execute().await {
                        error!(job = job.name(), error = %e, "Scheduled job failed; stopping scheduler");
                        return Err(e);
                    }
                    next_run = schedule.next_run_after(clock.now());
                    info!(job = job.name(), %next_run, "Scheduled job finished");
                }
                msg = receiver.recv() => {
                    match msg {
                        Some(SchedulerMessage::Shutdown) | None => {
                            info!(job = job.name(), "Scheduler stopped");
                            return Ok(());
                        }
                    }
                }
            }
        }
    });

    SchedulerHandle {
        stopper: Stopper { sender },
        task,
    }
}

/// The fetch-and-write pipeline as a scheduled job.
pub struct FeedJob {
    client: Client,
    config: PipelineConfig,
}

impl FeedJob {
    pub fn new(client: Client, config: PipelineConfig) -> Self {
        Self { client, config }
    }
}

impl ScheduledJob for FeedJob {
    fn name(&self) -> &'static str {
        "rss_feed"
    }

    async fn execute(&mut self) -> Result<()> {
        info!(
            source = %self.config.source,
            "Schedule started working, reading rss feed"
        );
        pipeline::run(&self.client, &self.config).await?;
        info!(
            directory = %self.config.directory.display(),
            "Process finished. Result files saved to the directory"
        );
        Ok(())
    }
}
