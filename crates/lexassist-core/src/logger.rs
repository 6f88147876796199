//! Tracing subscriber setup.
//!
//! Human-readable output on stderr, plus an optional daily-rolling log file in
//! the data directory. Keep the returned guard alive for the whole process or
//! buffered file lines are lost.

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::error::{AppError, AppResult};

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "lexassist.log";

/// Directory the rolling file appender writes into.
pub fn log_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_DIR)
}

/// `RUST_LOG` wins over the level given on the command line.
fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber.
///
/// `file_dir` enables the file layer. Returns its flush guard, if any.
pub fn init_logging(default_level: &str, file_dir: Option<&Path>) -> AppResult<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(build_filter(default_level));

    let (file_layer, guard) = match file_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(build_filter("debug"));
            (Some(layer), Some(guard))
        },
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(guard)
}
