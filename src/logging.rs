//! Tracing initialisation.
//!
//! Logs go to stderr unless a log file is given, in which case they are
//! appended to it without ANSI colours. `RUST_LOG` overrides the level.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt as tfmt};

const TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Install the global subscriber.
///
/// # Errors
///
/// [`Error::Io`] if the log file cannot be opened, [`Error::Logging`] if a
/// subscriber is already installed.
pub fn init(level: Level, log_file: Option<&Path>) -> Result<()> {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(level, env_directives.as_deref());
    let (writer, ansi) = build_writer(log_file)?;

    tfmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

/// `RUST_LOG`-style directives win when present and valid; otherwise `level`.
fn build_filter(level: Level, env_directives: Option<&str>) -> EnvFilter {
    env_directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(level.as_str()))
}

/// Log destination, plus whether ANSI colours suit it.
///
/// A log file is created if missing and always appended to.
fn build_writer(log_file: Option<&Path>) -> Result<(BoxMakeWriter, bool)> {
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| Error::io(path, e))?;
            Ok((BoxMakeWriter::new(Mutex::new(file)), false))
        }
        None => Ok((BoxMakeWriter::new(std::io::stderr), true)),
    }
}
