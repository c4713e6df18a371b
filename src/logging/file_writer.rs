//! File-based logging with tracing integration
//!
//! Sets up a tracing subscriber that writes to a timestamped file.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Local;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Prefix of logdog's own diagnostic log files
pub(super) const DIAGNOSTIC_FILE_PREFIX: &str = "logdog-tui-";

/// Extension of logdog's own diagnostic log files
pub(super) const DIAGNOSTIC_FILE_EXTENSION: &str = "log";

/// Information about the current log file
#[derive(Debug, Clone)]
pub struct LogFileInfo {
    /// Full path to the log file
    pub path: PathBuf,
}

/// Generate a timestamped log file path
pub fn create_log_file_path(logs_dir: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    logs_dir.join(format!(
        "{}{}.{}",
        DIAGNOSTIC_FILE_PREFIX, timestamp, DIAGNOSTIC_FILE_EXTENSION
    ))
}

/// Initialize file logging
///
/// Filtering follows `RUST_LOG` when set, `logdog=info` otherwise.
pub fn init_file_logging(logs_dir: &Path) -> Result<LogFileInfo> {
    fs::create_dir_all(logs_dir).context("Failed to create logs directory")?;

    let log_path = create_log_file_path(logs_dir);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context("Failed to open log file")?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "logdog=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(LogFileInfo { path: log_path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_log_file_path() {
        let logs_dir = PathBuf::from("/tmp/logdog/logs");
        let path = create_log_file_path(&logs_dir);
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("logdog-tui-"));
        assert!(name.ends_with(".log"));
        assert!(path.starts_with(&logs_dir));
    }

    #[test]
    fn test_diagnostic_files_are_not_log_store_files() {
        let path = create_log_file_path(Path::new("/tmp"));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(!crate::store::is_log_file_name(&name));
    }
}
