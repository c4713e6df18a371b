//! Diagnostic logging for Logdog itself
//!
//! Logdog writes its own tracing output to timestamped files under ~/.logdog/logs,
//! never to the terminal it is drawing on.

mod file_writer;
mod retention;

pub use file_writer::{init_file_logging, LogFileInfo};
pub use retention::cleanup_old_logs;
