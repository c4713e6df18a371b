//! UI state
//!
//! The single mutable model of the interactive session. Every transition takes
//! the current value and produces the next one.

use std::path::PathBuf;

use super::screen::{Screen, MAIN_MENU};
use crate::config::{
    clamp_retention, DEFAULT_RETENTION_DAYS, MAX_RETENTION_DAYS, MIN_RETENTION_DAYS,
};
use crate::formatter::RenderedLine;

/// Where the current log file list came from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogSource {
    /// The detected project in the working directory
    #[default]
    Local,
    /// A named project under the global log root
    Global(String),
}

/// A destructive action waiting for a `y`
///
/// Holding at most one of these makes the two confirmations mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// Delete the log file at this index of `log_files`
    Delete { index: usize },
    /// Delete every listed file older than the retention threshold
    ClearOld { count: usize },
}

/// Interactive state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Active screen
    pub screen: Screen,
    /// Position within the current screen's selectable list
    pub cursor: usize,
    /// Transient status message
    pub message: Option<String>,
    /// Pending confirmation, if any
    pub pending: Option<Confirmation>,
    /// Formatted lines of the viewed log (meaningful only on LogView)
    pub log_content: Vec<RenderedLine>,
    /// File shown on LogView
    pub viewing: Option<PathBuf>,
    /// Discovered log files for the active source
    pub log_files: Vec<PathBuf>,
    /// Source of `log_files`
    pub log_source: LogSource,
    /// Project names under the global log root
    pub global_projects: Vec<String>,
    /// Global project being browsed
    pub selected_project: Option<String>,
    /// Age in days beyond which a log file may be bulk-deleted
    pub retention_days: u32,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(DEFAULT_RETENTION_DAYS, Vec::new(), Vec::new())
    }
}

impl UiState {
    /// Initial state: Main screen, cursor 0, nothing pending
    pub fn new(retention_days: u32, log_files: Vec<PathBuf>, global_projects: Vec<String>) -> Self {
        Self {
            screen: Screen::Main,
            cursor: 0,
            message: None,
            pending: None,
            log_content: Vec::new(),
            viewing: None,
            log_files,
            log_source: LogSource::Local,
            global_projects,
            selected_project: None,
            retention_days: clamp_retention(retention_days),
        }
    }

    /// Highest valid cursor position for the active screen (0 for empty lists)
    pub fn max_cursor(&self) -> usize {
        match self.screen {
            Screen::Main => MAIN_MENU.len() - 1,
            Screen::Install | Screen::Settings => 0,
            Screen::LogList => self.log_files.len().saturating_sub(1),
            Screen::LogView => self.log_content.len().saturating_sub(1),
            Screen::GlobalProjectSelect => self.global_projects.len().saturating_sub(1),
        }
    }

    /// Pull the cursor back inside `[0, max_cursor]`
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.max_cursor());
    }

    /// Move the cursor up one position
    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down one position
    pub fn select_next(&mut self) {
        if self.cursor < self.max_cursor() {
            self.cursor += 1;
        }
    }

    /// Whether a confirmation is pending
    pub fn is_confirming(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether a single-file delete is pending
    pub fn is_confirming_delete(&self) -> bool {
        matches!(self.pending, Some(Confirmation::Delete { .. }))
    }

    /// Whether a bulk clear is pending
    pub fn is_confirming_clear(&self) -> bool {
        matches!(self.pending, Some(Confirmation::ClearOld { .. }))
    }

    /// Log file under the cursor
    pub fn selected_log(&self) -> Option<&PathBuf> {
        self.log_files.get(self.cursor)
    }

    /// Raise retention by one day, returning false at the ceiling
    pub fn increase_retention(&mut self) -> bool {
        if self.retention_days < MAX_RETENTION_DAYS {
            self.retention_days += 1;
            true
        } else {
            false
        }
    }

    /// Lower retention by one day, returning false at the floor
    pub fn decrease_retention(&mut self) -> bool {
        if self.retention_days > MIN_RETENTION_DAYS {
            self.retention_days -= 1;
            true
        } else {
            false
        }
    }
}
