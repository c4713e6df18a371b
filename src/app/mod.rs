//! Application state and main event loop
//!
//! The pure screen state machine (`update`), the runtime that executes its
//! commands, and the terminal loop tying them to crossterm input.

mod context;
mod runtime;
mod screen;
mod state;
mod update;

pub use context::ProjectContext;
pub use runtime::{Flow, Runtime};
pub use screen::{MenuItem, Screen, MAIN_MENU};
pub use state::{Confirmation, LogSource, UiState};
pub use update::{
    action_for, confirm_action_for, update, Action, Command, ConfirmAction, Event, FAILURE_MARK,
    SUCCESS_MARK,
};

use std::path::Path;

use anyhow::{Context, Result};
use crossterm::event::{self, Event as TermEvent};

use crate::config::Config;
use crate::input::translate_key;
use crate::tui::{views, Tui};

/// Main application struct
pub struct App {
    /// Session state and command execution
    runtime: Runtime,
    /// Terminal UI
    tui: Tui,
}

impl App {
    /// Create a new application for the project in `project_path`
    pub fn new(project_path: &Path, config: &Config) -> Result<Self> {
        let ctx = ProjectContext::detect(project_path, config);
        let runtime = Runtime::new(ctx, config.retention_days);
        let tui = Tui::new().context("Failed to initialize terminal")?;
        Ok(Self { runtime, tui })
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        self.tui.enter().context("Failed to enter terminal UI mode")?;

        tracing::info!("Logdog started in {}", self.runtime.ctx().project_path.display());

        let result = self.event_loop();

        // Drop also restores the terminal
        self.tui.exit()?;

        result
    }

    /// Blocking loop: draw, wait for one input, handle it completely
    fn event_loop(&mut self) -> Result<()> {
        loop {
            let (ctx, state) = (self.runtime.ctx(), self.runtime.state());
            self.tui.draw(|frame| views::render(frame, ctx, state))?;

            let key = match event::read()? {
                TermEvent::Key(key) => key,
                // Resize and other events just trigger a redraw
                _ => continue,
            };
            let Some(key) = translate_key(key) else {
                continue;
            };

            let flow = self.runtime.handle_key(key);
            if flow.quit {
                tracing::info!("Quit requested");
                break;
            }
            if flow.redraw {
                self.tui.clear()?;
            }
        }

        Ok(())
    }
}
