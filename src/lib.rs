//! # RSS reader
//!
//! Reads a single RSS/Atom feed and writes every article into its own text
//! file, named after the article title. Untitled articles are appended to a
//! shared `other_news.txt`.
//!
//! ## Usage
//!
//! ```sh
//! # One-off run
//! rss_reader -s https://blog.360totalsecurity.com/en/feed/ -d ./news
//!
//! # Long-running process that repeats the default run every day at 00:00
//! rss_schedule
//! ```
//!
//! ## Architecture
//!
//! The pipeline is linear:
//! 1. **Fetching**: [`fetcher`] retrieves the feed and extracts [`models::Article`]s
//! 2. **Writing**: [`writer`] creates one file per new title and appends the rest
//!
//! [`pipeline::run`] chains the two. The `rss_reader` binary calls it once;
//! the `rss_schedule` binary hands it to [`scheduler`] as a daily job.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod scheduler;
pub mod utils;
pub mod writer;

pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use models::Article;
