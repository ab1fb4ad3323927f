//! File-based tracing setup.
//!
//! The TUI owns stdout, so logs go to `contenthub.log` in the per-user data
//! directory (or `AppConfig::log_dir`). Setup is best-effort: on failure the
//! app runs without a subscriber.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

const LOG_FILE_NAME: &str = "contenthub.log";

/// Directory logs are written to, if one can be determined.
pub fn log_dir(config: &AppConfig) -> Option<PathBuf> {
    config
        .log_dir
        .clone()
        .or_else(|| dirs::data_local_dir().map(|d| d.join("contenthub").join("logs")))
}

/// Build the filter, falling back to `info` for an unparseable directive.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the log file.
///
/// Returns the log file path on success.
pub fn init_logging(config: &AppConfig) -> io::Result<PathBuf> {
    let dir = log_dir(config).ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no data directory for log file")
    })?;
    fs::create_dir_all(&dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e.to_string()))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(path)
}
