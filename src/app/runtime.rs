//! Command execution
//!
//! Owns the context and state, runs the filesystem work that transitions ask for,
//! and feeds each outcome back through `update` until nothing is left to do.

use std::collections::VecDeque;
use std::time::SystemTime;

use super::context::ProjectContext;
use super::state::{LogSource, UiState};
use super::update::{update, Command, Event};
use crate::error::io_error_reason;
use crate::formatter;
use crate::input::Key;
use crate::store;

/// What the terminal loop should do after an input was handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flow {
    /// End the session
    pub quit: bool,
    /// Clear the terminal before the next draw
    pub redraw: bool,
}

/// The interactive session without a terminal
pub struct Runtime {
    ctx: ProjectContext,
    state: UiState,
}

impl Runtime {
    /// Start a session with the local log list and global projects pre-populated
    pub fn new(ctx: ProjectContext, retention_days: u32) -> Self {
        let log_files = ctx.logs_for(&LogSource::Local);
        let global_projects = ctx.global_projects();
        tracing::debug!(
            "Session start: {} local log files, {} global projects",
            log_files.len(),
            global_projects.len()
        );
        let state = UiState::new(retention_days, log_files, global_projects);
        Self { ctx, state }
    }

    pub fn ctx(&self) -> &ProjectContext {
        &self.ctx
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: Key) -> Flow {
        self.dispatch(Event::Key(key))
    }

    /// Apply an event and every event its commands produce
    pub fn dispatch(&mut self, event: Event) -> Flow {
        let mut flow = Flow::default();
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (next, commands) = update(&self.ctx, state, event);
            self.state = next;

            for command in commands {
                match command {
                    Command::Quit => flow.quit = true,
                    Command::Redraw => flow.redraw = true,
                    other => queue.extend(self.execute(other)),
                }
            }
        }

        flow
    }

    /// Run one side-effecting command and report its outcome
    fn execute(&self, command: Command) -> Option<Event> {
        tracing::debug!("Executing {:?}", command);
        match command {
            Command::Install => {
                let lang = self.ctx.language?;
                let result = lang
                    .install(&self.ctx.project_path, &self.ctx.logger)
                    .map_err(|e| {
                        tracing::error!("Install failed: {}", e);
                        e.user_message()
                    });
                Some(Event::Installed(result))
            }
            Command::RefreshLogs(source) => {
                let files = self.ctx.logs_for(&source);
                Some(Event::LogsListed { source, files })
            }
            Command::ScanProjects => Some(Event::ProjectsScanned(self.ctx.global_projects())),
            Command::LoadLog(path) => {
                let result = store::read_entries(&path)
                    .map(|lines| formatter::format_lines(&lines))
                    .map_err(|e| {
                        tracing::warn!("Failed to read {}: {}", path.display(), e);
                        io_error_reason(&e)
                    });
                Some(Event::LogLoaded { path, result })
            }
            Command::FindOldLogs { files, days } => Some(Event::OldLogsFound(store::older_than(
                &files,
                days,
                SystemTime::now(),
            ))),
            Command::DeleteLog(path) => {
                let result = store::remove(&path).map_err(|e| {
                    tracing::warn!("Failed to delete {}: {}", path.display(), e);
                    io_error_reason(&e)
                });
                Some(Event::LogDeleted { path, result })
            }
            Command::ClearOldLogs { files, days } => {
                // Ages are re-evaluated at confirm time
                let old = store::older_than(&files, days, SystemTime::now());
                let mut deleted = 0;
                let mut errors = Vec::new();
                for path in &old {
                    match store::remove(path) {
                        Ok(()) => deleted += 1,
                        Err(e) => {
                            tracing::warn!("Failed to delete {}: {}", path.display(), e);
                            errors.push(format!(
                                "Failed to delete {}: {}",
                                store::display_name(path),
                                io_error_reason(&e)
                            ));
                        }
                    }
                }
                tracing::info!("Cleared {} of {} old log files", deleted, old.len());
                Some(Event::OldLogsCleared { deleted, errors })
            }
            Command::Redraw | Command::Quit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screen::Screen;
    use crate::config::Config;
    use std::fs::{self, File};
    use std::path::{Path, PathBuf};
    use std::time::Duration;
    use tempfile::TempDir;

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);

    struct Fixture {
        project: TempDir,
        global: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                project: TempDir::new().unwrap(),
                global: TempDir::new().unwrap(),
            }
        }

        fn go(self) -> Self {
            fs::write(self.project.path().join("go.mod"), "module example.com/app\n").unwrap();
            self
        }

        fn logs_dir(&self) -> PathBuf {
            self.project.path().join("logdog/logs")
        }

        fn runtime(&self) -> Runtime {
            let config = Config {
                global_root: Some(self.global.path().to_path_buf()),
                ..Config::default()
            };
            Runtime::new(ProjectContext::detect(self.project.path(), &config), 7)
        }
    }

    fn write_log(path: &Path, lines: &[&str], age: Duration) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, lines.join("\n")).unwrap();
        let mtime = SystemTime::now() - age;
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(mtime)
            .unwrap();
    }

    fn keys(runtime: &mut Runtime, keys: &[Key]) -> Flow {
        let mut flow = Flow::default();
        for key in keys {
            flow = runtime.handle_key(*key);
        }
        flow
    }

    #[test]
    fn test_empty_project_install_is_status_only() {
        let fixture = Fixture::new();
        let mut runtime = fixture.runtime();
        assert!(runtime.ctx().language.is_none());
        assert!(runtime.state().log_files.is_empty());

        let flow = keys(&mut runtime, &[Key::Enter, Key::Enter]);
        assert!(flow.redraw);
        assert!(!flow.quit);
        assert_eq!(runtime.state().screen, Screen::Main);
        assert_eq!(
            runtime.state().message.as_deref(),
            Some("✗ No supported language detected")
        );
        assert!(fs::read_dir(fixture.project.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_install_then_list() {
        let fixture = Fixture::new().go();
        let mut runtime = fixture.runtime();

        let flow = keys(&mut runtime, &[Key::Enter, Key::Enter]);
        assert!(flow.redraw);
        assert_eq!(runtime.state().screen, Screen::Main);
        assert!(runtime
            .state()
            .message
            .as_deref()
            .unwrap()
            .starts_with("✓ Logger installed"));
        assert!(fixture
            .project
            .path()
            .join("internal/logdog/logger.go")
            .is_file());
        assert!(fixture.logs_dir().is_dir());

        // Reinstall is reported
        keys(&mut runtime, &[Key::Enter, Key::Enter]);
        assert!(runtime.state().message.as_deref().unwrap().contains("overwritten"));
    }

    #[test]
    fn test_delete_relists_and_clamps_cursor() {
        let fixture = Fixture::new().go();
        let logs = fixture.logs_dir();
        for day in 1..=3 {
            write_log(
                &logs.join(format!("logdog-2024-01-0{}.json", day)),
                &[r#"{"message":"m"}"#],
                Duration::ZERO,
            );
        }
        let mut runtime = fixture.runtime();
        assert_eq!(runtime.state().log_files.len(), 3);

        keys(
            &mut runtime,
            &[Key::Down, Key::Enter, Key::Down, Key::Down, Key::Char('d')],
        );
        assert!(runtime.state().is_confirming_delete());

        keys(&mut runtime, &[Key::Char('y')]);
        assert!(!logs.join("logdog-2024-01-03.json").exists());
        assert_eq!(runtime.state().log_files.len(), 2);
        assert_eq!(runtime.state().cursor, 1);
        assert_eq!(
            runtime.state().message.as_deref(),
            Some("✓ Deleted logdog-2024-01-03.json")
        );
    }

    #[test]
    fn test_cancelled_delete_keeps_file() {
        let fixture = Fixture::new().go();
        let log = fixture.logs_dir().join("logdog-2024-01-01.json");
        write_log(&log, &["{}"], Duration::ZERO);
        let mut runtime = fixture.runtime();

        keys(&mut runtime, &[Key::Down, Key::Enter, Key::Char('d'), Key::Esc]);
        assert!(log.exists());
        assert_eq!(runtime.state().screen, Screen::LogList);
        assert!(!runtime.state().is_confirming());
    }

    #[test]
    fn test_clear_old_logs() {
        let fixture = Fixture::new().go();
        let logs = fixture.logs_dir();
        let recent = logs.join("logdog-2024-01-03.json");
        let older = logs.join("logdog-2024-01-02.json");
        let oldest = logs.join("logdog-2024-01-01.json");
        write_log(&recent, &["{}"], DAY);
        write_log(&older, &["{}"], DAY * 10);
        write_log(&oldest, &["{}"], DAY * 30);

        let mut runtime = fixture.runtime();
        keys(&mut runtime, &[Key::Down, Key::Enter, Key::Char('c')]);
        assert!(runtime.state().is_confirming_clear());
        assert!(runtime
            .state()
            .message
            .as_deref()
            .unwrap()
            .starts_with("Clear 2 log files older than 7 days?"));

        keys(&mut runtime, &[Key::Char('y')]);
        assert!(recent.exists());
        assert!(!older.exists());
        assert!(!oldest.exists());
        assert_eq!(runtime.state().log_files, vec![recent]);
        assert_eq!(
            runtime.state().message.as_deref(),
            Some("✓ Cleared 2 old log files")
        );
    }

    #[test]
    fn test_clear_with_nothing_old() {
        let fixture = Fixture::new().go();
        write_log(
            &fixture.logs_dir().join("logdog-2024-01-01.json"),
            &["{}"],
            DAY,
        );
        let mut runtime = fixture.runtime();
        keys(&mut runtime, &[Key::Down, Key::Enter, Key::Char('c')]);
        assert!(!runtime.state().is_confirming());
        assert_eq!(
            runtime.state().message.as_deref(),
            Some("No log files older than 7 days found")
        );
    }

    #[test]
    fn test_view_log_formats_lines() {
        let fixture = Fixture::new().go();
        write_log(
            &fixture.logs_dir().join("logdog-2024-01-15.json"),
            &[
                r#"{"timestamp":"2024-01-15T14:30:45Z","level":"INFO","message":"hi","data":{"x":1}}"#,
                "",
                "plain text",
            ],
            Duration::ZERO,
        );
        let mut runtime = fixture.runtime();

        keys(&mut runtime, &[Key::Down, Key::Enter, Key::Char('v')]);
        let state = runtime.state();
        assert_eq!(state.screen, Screen::LogView);
        assert_eq!(state.log_content.len(), 2);
        assert_eq!(state.log_content[0].plain(), "Jan 15 14:30:45 [INFO] hi {x=1}");
        assert!(state.log_content[1].is_raw());
    }

    #[test]
    fn test_view_missing_file_reports_error() {
        let fixture = Fixture::new().go();
        let log = fixture.logs_dir().join("logdog-2024-01-15.json");
        write_log(&log, &["{}"], Duration::ZERO);
        let mut runtime = fixture.runtime();
        keys(&mut runtime, &[Key::Down, Key::Enter]);
        fs::remove_file(&log).unwrap();

        keys(&mut runtime, &[Key::Char('v')]);
        assert_eq!(runtime.state().screen, Screen::LogList);
        assert_eq!(
            runtime.state().message.as_deref(),
            Some("✗ Error reading log: file or directory not found")
        );
    }

    #[test]
    fn test_global_project_browse_and_delete() {
        let fixture = Fixture::new().go();
        let api = fixture.global.path().join("api");
        write_log(&api.join("logdog-2024-01-01.json"), &["{}"], Duration::ZERO);
        write_log(&api.join("logdog-2024-01-02.json"), &["{}"], Duration::ZERO);
        fs::create_dir_all(fixture.global.path().join("web")).unwrap();
        write_log(
            &fixture.logs_dir().join("logdog-2024-02-01.json"),
            &["{}"],
            Duration::ZERO,
        );

        let mut runtime = fixture.runtime();
        assert_eq!(runtime.state().global_projects, vec!["api", "web"]);

        keys(&mut runtime, &[Key::Down, Key::Down, Key::Enter]);
        assert_eq!(runtime.state().screen, Screen::GlobalProjectSelect);

        keys(&mut runtime, &[Key::Enter]);
        assert_eq!(runtime.state().screen, Screen::LogList);
        assert_eq!(runtime.state().log_source, LogSource::Global("api".into()));
        assert_eq!(runtime.state().log_files.len(), 2);

        // Delete within the global project re-lists that project, not the local one
        keys(&mut runtime, &[Key::Char('d'), Key::Char('y')]);
        assert_eq!(
            runtime.state().log_files,
            vec![api.join("logdog-2024-01-02.json")]
        );

        keys(&mut runtime, &[Key::Esc]);
        assert_eq!(runtime.state().screen, Screen::Main);
        assert_eq!(
            runtime.state().log_files,
            vec![fixture.logs_dir().join("logdog-2024-02-01.json")]
        );
    }

    #[test]
    fn test_rescan_picks_up_new_projects() {
        let fixture = Fixture::new();
        let mut runtime = fixture.runtime();
        assert!(runtime.state().global_projects.is_empty());

        fs::create_dir_all(fixture.global.path().join("later")).unwrap();
        keys(&mut runtime, &[Key::Down, Key::Down, Key::Enter]);
        assert_eq!(runtime.state().global_projects, vec!["later"]);
    }

    #[test]
    fn test_quit_from_any_screen() {
        let fixture = Fixture::new();
        let mut runtime = fixture.runtime();
        let flow = keys(&mut runtime, &[Key::Down, Key::Down, Key::Down, Key::Enter, Key::Quit]);
        assert!(flow.quit);
    }
}
