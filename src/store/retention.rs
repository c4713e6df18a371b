//! Age-based retention filtering
//!
//! Selects log files whose modification time lies before a day-granularity cutoff.
//! A file whose metadata cannot be read is never selected.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// The instant `days` days before `now`
pub fn cutoff_for(days: u32, now: SystemTime) -> SystemTime {
    let retention_duration = Duration::from_secs(u64::from(days) * SECS_PER_DAY);
    now.checked_sub(retention_duration)
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Check whether a file was last modified before `cutoff`
///
/// Returns false when the file cannot be stat'ed.
pub fn modified_before(path: &Path, cutoff: SystemTime) -> bool {
    match fs::metadata(path).and_then(|m| m.modified()) {
        Ok(modified) => modified < cutoff,
        Err(e) => {
            tracing::debug!("Cannot stat {}: {}", path.display(), e);
            false
        }
    }
}

/// Select the files older than `days` days relative to `now`, keeping input order
pub fn older_than(paths: &[PathBuf], days: u32, now: SystemTime) -> Vec<PathBuf> {
    let cutoff = cutoff_for(days, now);
    paths
        .iter()
        .filter(|path| modified_before(path, cutoff))
        .cloned()
        .collect()
}
