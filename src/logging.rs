//! Tracing setup
//!
//! The TUI owns the terminal, so log output goes to a file under the data
//! directory instead of stderr.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{OnboardPaths, Settings};
use crate::error::{OnboardError, OnboardResult};

/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "ONBOARD_LOG";

/// Log file name inside the log directory
pub const LOG_FILE: &str = "onboard.log";

/// Install the global subscriber writing to `<base>/logs/onboard.log`.
///
/// The returned guard flushes buffered lines when dropped; keep it alive
/// for the life of the program.
pub fn init(paths: &OnboardPaths, settings: &Settings) -> OnboardResult<WorkerGuard> {
    paths.ensure_directories()?;

    let appender = tracing_appender::rolling::never(paths.log_dir(), LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| OnboardError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}
