//! Command-line interface definitions for the RSS reader.

use crate::config::{DEFAULT_DIRECTORY, DEFAULT_SOURCE_URL, PipelineConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Reads an RSS feed and writes the found articles into separate files;
/// each file is named after its article.
///
/// # Examples
///
/// ```sh
/// # Default feed into ./news
/// rss_reader
///
/// # Another feed, debug logging into a file
/// rss_reader -s https://example.com/feed -d ./out --dry -l reader.log
/// ```
#[derive(Parser, Debug)]
#[command(name = "rss_reader", author, version, about)]
pub struct Cli {
    /// RSS feed URL (or path to a local feed file)
    #[arg(short, long, default_value = DEFAULT_SOURCE_URL)]
    pub source: String,

    /// Path to the folder where the articles will be recorded
    #[arg(short, long, default_value = DEFAULT_DIRECTORY)]
    pub directory: PathBuf,

    /// Dry run flag: log at DEBUG level instead of INFO
    #[arg(long)]
    pub dry: bool,

    /// File name of the log file
    #[arg(short, long)]
    pub log: Option<PathBuf>,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.dry { Level::DEBUG } else { Level::INFO }
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new(self.source.clone(), self.directory.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["rss_reader"]);

        assert_eq!(cli.source, DEFAULT_SOURCE_URL);
        assert_eq!(cli.directory, PathBuf::from("news"));
        assert!(!cli.dry);
        assert!(cli.log.is_none());
        assert_eq!(cli.log_level(), Level::INFO);
        assert_eq!(cli.pipeline_config(), PipelineConfig::default());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "rss_reader",
            "-s",
            "https://example.com/feed",
            "-d",
            "/tmp/out",
            "-l",
            "reader.log",
        ]);

        assert_eq!(cli.source, "https://example.com/feed");
        assert_eq!(cli.directory, PathBuf::from("/tmp/out"));
        assert_eq!(cli.log, Some(PathBuf::from("reader.log")));
    }

    #[test]
    fn test_cli_long_flags_and_dry() {
        let cli = Cli::parse_from([
            "rss_reader",
            "--source",
            "feed.xml",
            "--directory",
            "out",
            "--dry",
            "--log",
            "x.log",
        ]);

        assert!(cli.dry);
        assert_eq!(cli.log_level(), Level::DEBUG);
        let config = cli.pipeline_config();
        assert_eq!(config.source, "feed.xml");
        assert_eq!(config.directory, PathBuf::from("out"));
    }
}
