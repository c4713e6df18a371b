//! Screen state machine
//!
//! `update` is a pure function from (state, event) to (next state, commands).
//! Commands describe filesystem work; the runtime executes them and feeds their
//! outcomes back in as events.

use std::path::PathBuf;

use super::context::ProjectContext;
use super::screen::{MenuItem, Screen};
use super::state::{Confirmation, LogSource, UiState};
use crate::detector::InstallOutcome;
use crate::formatter::RenderedLine;
use crate::input::Key;
use crate::store;

/// Failure marker prefixed to error status messages
pub const FAILURE_MARK: &str = "✗";
/// Success marker prefixed to success status messages
pub const SUCCESS_MARK: &str = "✓";

/// Input to the state machine
#[derive(Debug, Clone)]
pub enum Event {
    /// A key press
    Key(Key),
    /// Outcome of [`Command::Install`]
    Installed(Result<InstallOutcome, String>),
    /// Outcome of [`Command::RefreshLogs`]
    LogsListed {
        source: LogSource,
        files: Vec<PathBuf>,
    },
    /// Outcome of [`Command::ScanProjects`]
    ProjectsScanned(Vec<String>),
    /// Outcome of [`Command::LoadLog`]
    LogLoaded {
        path: PathBuf,
        result: Result<Vec<RenderedLine>, String>,
    },
    /// Outcome of [`Command::FindOldLogs`]
    OldLogsFound(Vec<PathBuf>),
    /// Outcome of [`Command::DeleteLog`]
    LogDeleted {
        path: PathBuf,
        result: Result<(), String>,
    },
    /// Outcome of [`Command::ClearOldLogs`]
    OldLogsCleared { deleted: usize, errors: Vec<String> },
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Install the logger into the detected project
    Install,
    /// Re-list log files for a source
    RefreshLogs(LogSource),
    /// Re-scan project names under the global root
    ScanProjects,
    /// Read and format a log file
    LoadLog(PathBuf),
    /// Select the files older than `days`
    FindOldLogs { files: Vec<PathBuf>, days: u32 },
    /// Delete one log file
    DeleteLog(PathBuf),
    /// Delete every file older than `days`
    ClearOldLogs { files: Vec<PathBuf>, days: u32 },
    /// Clear and repaint the whole terminal
    Redraw,
    /// End the session
    Quit,
}

/// What a key means on a given screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    /// Enter on a list screen
    Select,
    /// Enter on the install screen
    Install,
    ViewLog,
    DeleteLog,
    ClearOldLogs,
    IncreaseRetention,
    DecreaseRetention,
    Back,
    /// Key with no binding on this screen
    Unbound,
}

/// What a key means while a confirmation is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Confirm,
    /// Navigation keys do nothing while confirming
    Ignore,
    Cancel,
}

/// Key bindings per screen
pub fn action_for(screen: Screen, key: Key) -> Action {
    match (screen, key) {
        (_, Key::Quit) => Action::Quit,
        (_, Key::Up) => Action::MoveUp,
        (_, Key::Down) => Action::MoveDown,
        (_, Key::Esc) => Action::Back,

        (Screen::Main | Screen::GlobalProjectSelect, Key::Enter) => Action::Select,
        (Screen::Install, Key::Enter) => Action::Install,

        (Screen::LogList, Key::Char('v')) => Action::ViewLog,
        (Screen::LogList, Key::Char('d')) => Action::DeleteLog,
        (Screen::LogList, Key::Char('c')) => Action::ClearOldLogs,

        (Screen::Settings, Key::Char('+' | '=')) => Action::IncreaseRetention,
        (Screen::Settings, Key::Char('-' | '_')) => Action::DecreaseRetention,

        _ => Action::Unbound,
    }
}

/// Key bindings while a confirmation is pending
pub fn confirm_action_for(key: Key) -> ConfirmAction {
    match key {
        Key::Char('y' | 'Y') => ConfirmAction::Confirm,
        Key::Up | Key::Down | Key::Enter => ConfirmAction::Ignore,
        _ => ConfirmAction::Cancel,
    }
}

/// Apply one event to the state
pub fn update(ctx: &ProjectContext, state: UiState, event: Event) -> (UiState, Vec<Command>) {
    match event {
        Event::Key(key) => handle_key(ctx, state, key),
        Event::Installed(result) => on_installed(ctx, state, result),
        Event::LogsListed { source, files } => on_logs_listed(state, source, files),
        Event::ProjectsScanned(projects) => on_projects_scanned(state, projects),
        Event::LogLoaded { path, result } => on_log_loaded(state, path, result),
        Event::OldLogsFound(old) => on_old_logs_found(state, old),
        Event::LogDeleted { path, result } => on_log_deleted(state, path, result),
        Event::OldLogsCleared { deleted, errors } => on_old_logs_cleared(state, deleted, errors),
    }
}

fn handle_key(ctx: &ProjectContext, mut state: UiState, key: Key) -> (UiState, Vec<Command>) {
    if let Some(pending) = state.pending.clone() {
        return match confirm_action_for(key) {
            ConfirmAction::Confirm => confirm(state, pending),
            ConfirmAction::Ignore => (state, vec![]),
            ConfirmAction::Cancel => {
                state.pending = None;
                state.message = None;
                (state, vec![])
            }
        };
    }

    let commands = match action_for(state.screen, key) {
        Action::Quit => vec![Command::Quit],
        Action::MoveUp => {
            state.select_prev();
            state.message = None;
            vec![]
        }
        Action::MoveDown => {
            state.select_next();
            state.message = None;
            vec![]
        }
        Action::Select => return select(state),
        Action::Install => return install(ctx, state),
        Action::ViewLog => match state.selected_log() {
            Some(path) => vec![Command::LoadLog(path.clone())],
            None => vec![],
        },
        Action::DeleteLog => {
            if let Some(path) = state.selected_log() {
                state.message = Some(format!(
                    "Delete {}? Press 'y' to confirm, any other key to cancel",
                    store::display_name(path)
                ));
                state.pending = Some(Confirmation::Delete {
                    index: state.cursor,
                });
            }
            vec![]
        }
        Action::ClearOldLogs => {
            if state.log_files.is_empty() {
                vec![]
            } else {
                vec![Command::FindOldLogs {
                    files: state.log_files.clone(),
                    days: state.retention_days,
                }]
            }
        }
        Action::IncreaseRetention => {
            if state.increase_retention() {
                state.message = Some(retention_message(state.retention_days));
            }
            vec![]
        }
        Action::DecreaseRetention => {
            if state.decrease_retention() {
                state.message = Some(retention_message(state.retention_days));
            }
            vec![]
        }
        Action::Back => return back(state),
        Action::Unbound => {
            state.message = None;
            vec![]
        }
    };
    (state, commands)
}

fn retention_message(days: u32) -> String {
    format!("Retention set to {} days", days)
}

fn select(mut state: UiState) -> (UiState, Vec<Command>) {
    match state.screen {
        Screen::Main => {
            let Some(item) = MenuItem::at(state.cursor) else {
                return (state, vec![]);
            };
            let commands = match item {
                MenuItem::Install => {
                    state.screen = Screen::Install;
                    vec![]
                }
                MenuItem::ViewLogs => {
                    state.screen = Screen::LogList;
                    state.log_source = LogSource::Local;
                    state.selected_project = None;
                    vec![Command::RefreshLogs(LogSource::Local)]
                }
                MenuItem::GlobalLogs => {
                    state.screen = Screen::GlobalProjectSelect;
                    vec![Command::ScanProjects]
                }
                MenuItem::Settings => {
                    state.screen = Screen::Settings;
                    vec![]
                }
                MenuItem::Quit => return (state, vec![Command::Quit]),
            };
            state.cursor = 0;
            state.message = None;
            (state, commands)
        }
        Screen::GlobalProjectSelect => {
            let Some(project) = state.global_projects.get(state.cursor).cloned() else {
                return (state, vec![]);
            };
            let source = LogSource::Global(project.clone());
            state.selected_project = Some(project);
            state.log_source = source.clone();
            state.log_files.clear();
            state.screen = Screen::LogList;
            state.cursor = 0;
            state.message = None;
            (state, vec![Command::RefreshLogs(source)])
        }
        _ => (state, vec![]),
    }
}

fn install(ctx: &ProjectContext, mut state: UiState) -> (UiState, Vec<Command>) {
    if ctx.language.is_some() {
        return (state, vec![Command::Install]);
    }
    state.message = Some(format!("{} No supported language detected", FAILURE_MARK));
    state.screen = Screen::Main;
    state.cursor = 0;
    (state, vec![Command::Redraw])
}

fn back(mut state: UiState) -> (UiState, Vec<Command>) {
    let was_global = matches!(state.log_source, LogSource::Global(_));

    state.screen = Screen::Main;
    state.cursor = 0;
    state.message = None;
    state.pending = None;
    state.log_content.clear();
    state.viewing = None;
    state.selected_project = None;
    state.log_source = LogSource::Local;

    let commands = if was_global {
        vec![Command::RefreshLogs(LogSource::Local)]
    } else {
        vec![]
    };
    (state, commands)
}

fn confirm(mut state: UiState, pending: Confirmation) -> (UiState, Vec<Command>) {
    state.pending = None;
    match pending {
        Confirmation::Delete { index } => match state.log_files.get(index).cloned() {
            Some(path) => (state, vec![Command::DeleteLog(path)]),
            None => {
                state.message = None;
                (state, vec![])
            }
        },
        Confirmation::ClearOld { .. } => {
            let command = Command::ClearOldLogs {
                files: state.log_files.clone(),
                days: state.retention_days,
            };
            (state, vec![command])
        }
    }
}

fn on_installed(
    ctx: &ProjectContext,
    mut state: UiState,
    result: Result<InstallOutcome, String>,
) -> (UiState, Vec<Command>) {
    let commands = match result {
        Ok(outcome) => {
            let logger = ctx.relative(&outcome.logger_path).display().to_string();
            state.message = Some(if outcome.replaced_existing {
                format!(
                    "{} Logger reinstalled, existing {} was overwritten",
                    SUCCESS_MARK, logger
                )
            } else {
                format!(
                    "{} Logger installed successfully! Check {}",
                    SUCCESS_MARK, logger
                )
            });
            vec![Command::RefreshLogs(LogSource::Local), Command::Redraw]
        }
        Err(e) => {
            state.message = Some(format!("{} Install failed: {}", FAILURE_MARK, e));
            vec![Command::Redraw]
        }
    };
    state.screen = Screen::Main;
    state.cursor = 0;
    (state, commands)
}

fn on_logs_listed(
    mut state: UiState,
    source: LogSource,
    files: Vec<PathBuf>,
) -> (UiState, Vec<Command>) {
    // A listing for a source the user already left is stale
    if source == state.log_source {
        state.log_files = files;
        state.clamp_cursor();
    }
    (state, vec![])
}

fn on_projects_scanned(mut state: UiState, projects: Vec<String>) -> (UiState, Vec<Command>) {
    state.global_projects = projects;
    state.clamp_cursor();
    (state, vec![])
}

fn on_log_loaded(
    mut state: UiState,
    path: PathBuf,
    result: Result<Vec<RenderedLine>, String>,
) -> (UiState, Vec<Command>) {
    match result {
        Ok(lines) => {
            state.screen = Screen::LogView;
            state.log_content = lines;
            state.viewing = Some(path);
            state.cursor = 0;
            state.message = None;
        }
        Err(e) => {
            state.message = Some(format!("{} Error reading log: {}", FAILURE_MARK, e));
        }
    }
    (state, vec![])
}

fn on_old_logs_found(mut state: UiState, old: Vec<PathBuf>) -> (UiState, Vec<Command>) {
    if state.screen != Screen::LogList || state.is_confirming() {
        return (state, vec![]);
    }
    if old.is_empty() {
        state.message = Some(format!(
            "No log files older than {} days found",
            state.retention_days
        ));
    } else {
        state.message = Some(format!(
            "Clear {} log files older than {} days? Press 'y' to confirm, any other key to cancel",
            old.len(),
            state.retention_days
        ));
        state.pending = Some(Confirmation::ClearOld { count: old.len() });
    }
    (state, vec![])
}

fn on_log_deleted(
    mut state: UiState,
    path: PathBuf,
    result: Result<(), String>,
) -> (UiState, Vec<Command>) {
    let name = store::display_name(&path);
    state.message = Some(match result {
        Ok(()) => format!("{} Deleted {}", SUCCESS_MARK, name),
        Err(e) => format!("{} Failed to delete {}: {}", FAILURE_MARK, name, e),
    });
    let source = state.log_source.clone();
    (state, vec![Command::RefreshLogs(source)])
}

fn on_old_logs_cleared(
    mut state: UiState,
    deleted: usize,
    errors: Vec<String>,
) -> (UiState, Vec<Command>) {
    state.message = Some(if errors.is_empty() {
        format!("{} Cleared {} old log files", SUCCESS_MARK, deleted)
    } else {
        format!(
            "{} Deleted {} files. {} Errors: {}",
            SUCCESS_MARK,
            deleted,
            FAILURE_MARK,
            errors.join("; ")
        )
    });
    let source = state.log_source.clone();
    (state, vec![Command::RefreshLogs(source)])
}
