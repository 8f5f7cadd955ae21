//! Pipeline configuration.
//!
//! The defaults are plain constants. They are applied at the boundary (the
//! clap parser and the scheduler binary) and passed down explicitly.

use std::path::PathBuf;

/// Feed read when no `--source` is given.
pub const DEFAULT_SOURCE_URL: &str = "https://blog.360totalsecurity.com/en/feed/";

/// Directory written to when no `--directory` is given.
pub const DEFAULT_DIRECTORY: &str = "news";

/// Where to read the feed from and where to put the article files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Feed URL or local path.
    pub source: String,
    /// Pre-existing output directory.
    pub directory: PathBuf,
}

impl PipelineConfig {
    pub fn new(source: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            directory: directory.into(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_URL, DEFAULT_DIRECTORY)
    }
}
