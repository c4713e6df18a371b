//! Retention for logdog's own diagnostic logs
//!
//! Deletes diagnostic files older than the retention period at startup.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::Result;

use super::file_writer::{DIAGNOSTIC_FILE_EXTENSION, DIAGNOSTIC_FILE_PREFIX};
use crate::config::DEFAULT_RETENTION_DAYS;
use crate::store;

/// Clean up diagnostic log files older than the retention period
///
/// Returns the number of files deleted.
pub fn cleanup_old_logs(logs_dir: &Path) -> Result<usize> {
    cleanup_old_logs_with_retention(logs_dir, DEFAULT_RETENTION_DAYS, SystemTime::now())
}

/// Clean up diagnostic log files older than `retention_days` relative to `now`
///
/// Returns the number of files deleted.
pub fn cleanup_old_logs_with_retention(
    logs_dir: &Path,
    retention_days: u32,
    now: SystemTime,
) -> Result<usize> {
    if !logs_dir.exists() {
        return Ok(0);
    }

    let mut candidates: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(logs_dir)? {
        let path = entry?.path();
        let is_diagnostic = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| {
                name.starts_with(DIAGNOSTIC_FILE_PREFIX)
                    && name.ends_with(&format!(".{}", DIAGNOSTIC_FILE_EXTENSION))
            });
        if is_diagnostic {
            candidates.push(path);
        }
    }

    let deleted_count = store::older_than(&candidates, retention_days, now)
        .iter()
        .filter(|path| fs::remove_file(path).is_ok())
        .count();

    Ok(deleted_count)
}
