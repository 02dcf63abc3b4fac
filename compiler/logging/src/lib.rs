#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging setup for typegen.
//!
//! Installs a `tracing-subscriber` fmt subscriber. Output goes to stderr, or
//! to a log file when one is configured, so stdout stays free for tools that
//! consume it. `RUST_LOG` directives take precedence over the configured level.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The level is not one of trace, debug, info, warn, error, off
    #[error("Invalid log level '{0}'")]
    InvalidLevel(String),
    /// The log file could not be opened
    #[error("Failed to open log file {}: {source}", path.display())]
    File {
        /// Requested log file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// A global subscriber is already installed
    #[error("Logging is already initialized")]
    AlreadyInitialized,
}

/// Parse a textual log level
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    level.trim().parse::<LevelFilter>().map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}

/// Install the global subscriber at `level`, writing to stderr or to `file`.
pub fn init(level: &str, file: Option<&Path>) -> Result<(), LoggingError> {
    let level = parse_level(level)?;
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let installed = match file {
        Some(path) => {
            let file = open_log_file(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|_| LoggingError::AlreadyInitialized)?;

    tracing::debug!(%level, log_file = ?file, "logging initialized");
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::File { path: path.to_path_buf(), source })
}
