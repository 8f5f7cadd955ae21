//! `rss_schedule`: repeat the default run every day at 00:00 local time.
//!
//! Takes no flags. Stops on Ctrl-C, or with status 1 when a run fails.

use rss_reader::scheduler::{self, DailySchedule, FeedJob, LocalClock};
use rss_reader::{PipelineConfig, fetcher, logging};
use std::process::ExitCode;
use tracing::{Level, error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = logging::init(Level::INFO, None) {
        eprintln!("rss_schedule: {e}");
        return ExitCode::FAILURE;
    }

    let config = PipelineConfig::default();
    let client = match fetcher::build_client() {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to build HTTP client");
            return ExitCode::FAILURE;
        }
    };

    info!(
        source = %config.source,
        directory = %config.directory.display(),
        "Scheduling daily rss run at 00:00"
    );
    let handle = scheduler::spawn_daily(
        FeedJob::new(client, config),
        DailySchedule::midnight(),
        LocalClock,
    );

    let stopper = handle.stopper();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received; stopping scheduler");
            stopper.stop().await;
        }
    });

    match handle.wait().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, detail = ?e, "Scheduler terminated");
            ExitCode::FAILURE
        }
    }
}
