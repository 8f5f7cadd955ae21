//! Fetcher → Writer composition shared by both binaries.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::fetcher::fetch_articles;
use crate::writer::{WriteSummary, write_articles};
use reqwest::Client;
use std::time::Instant;
use tracing::{info, instrument};

/// Fetch the configured feed and write its articles.
///
/// Errors from either stage are returned untouched; nothing is retried.
#[instrument(level = "info", skip_all, fields(source = %config.source, directory = %config.directory.display()))]
pub async fn run(client: &Client, config: &PipelineConfig) -> Result<WriteSummary> {
    let t0 = Instant::now();
    info!("Start reading rss feeds...");

    let articles = fetch_articles(client, &config.source).await?;
    let summary = write_articles(&articles, &config.directory).await?;

    info!(
        elapsed_ms = t0.elapsed().as_millis() as u64,
        articles = articles.len(),
        "Pipeline run complete"
    );
    Ok(summary)
}
