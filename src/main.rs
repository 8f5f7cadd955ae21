//! `rss_reader`: fetch the feed once and write the articles.
//!
//! Exits with status 1 if anything in the pipeline fails; the error chain is
//! logged, not printed.

use clap::Parser;
use rss_reader::cli::Cli;
use rss_reader::writer::WriteSummary;
use rss_reader::{PipelineConfig, fetcher, logging, pipeline};
use std::error::Error as _;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();

    if let Err(e) = logging::init(args.log_level(), args.log.as_deref()) {
        eprintln!("rss_reader: {e}");
        return ExitCode::FAILURE;
    }

    info!(
        source = %args.source,
        directory = %args.directory.display(),
        dry = args.dry,
        log = ?args.log,
        "RSS reader started with options"
    );

    let config = args.pipeline_config();
    let result = run(&config).await;
    report(&config, &result)
}

/// One fetch/write pass with a fresh client.
async fn run(config: &PipelineConfig) -> rss_reader::Result<WriteSummary> {
    let client = fetcher::build_client()?;
    pipeline::run(&client, config).await
}

/// Log the outcome and pick the exit status.
fn report(config: &PipelineConfig, result: &rss_reader::Result<WriteSummary>) -> ExitCode {
    match result {
        Ok(summary) => {
            info!(
                directory = %config.directory.display(),
                written = summary.written,
                skipped = summary.skipped,
                untitled = summary.untitled,
                "Process finished. Result files saved to the directory"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            let mut chain = Vec::new();
            let mut cause = e.source();
            while let Some(inner) = cause {
                chain.push(inner.to_string());
                cause = inner.source();
            }
            error!(error = %e, caused_by = ?chain, "Unexpected error");
            ExitCode::FAILURE
        }
    }
}
