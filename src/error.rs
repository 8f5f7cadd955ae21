//! Error type shared by every stage of the pipeline.
//!
//! Nothing below the entry points recovers from an error: the fetcher, the
//! writer and the scheduler loop all hand their failures back up as an
//! [`Error`], and the binaries decide how to report them.

use std::path::PathBuf;

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure the reader can surface.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The feed request failed before a response was read.
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The feed server answered with a non-success status.
    #[error("{url} responded with HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    /// The payload is not a feed `feed-rs` understands.
    #[error("failed to parse feed from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: feed_rs::parser::ParseFeedError,
    },

    /// Reading a local feed or writing an article file failed.
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scheduler task panicked or was aborted.
    #[error("scheduler task ended abnormally")]
    Join(#[from] tokio::task::JoinError),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
