//! View rendering modules
//!
//! Each screen has its own module; `render` picks the one for the active screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{LogSource, ProjectContext, Screen, UiState};
use crate::tui::theme::theme;

mod confirm;
mod install;
mod log_list;
mod log_view;
mod main_menu;
mod projects;
mod settings;

pub use confirm::{render_confirm_dialog, ConfirmDialogConfig};
pub use install::render_install;
pub use log_list::render_log_list;
pub use log_view::render_log_view;
pub use main_menu::render_main_menu;
pub use projects::render_global_projects;
pub use settings::render_settings;

/// Render the active screen
pub fn render(frame: &mut Frame, ctx: &ProjectContext, state: &UiState) {
    let area = frame.size();
    match state.screen {
        Screen::Main => render_main_menu(frame, area, ctx, state),
        Screen::Install => render_install(frame, area, ctx, state),
        Screen::LogList => render_log_list(frame, area, state),
        Screen::LogView => render_log_view(frame, area, state),
        Screen::Settings => render_settings(frame, area, ctx, state),
        Screen::GlobalProjectSelect => render_global_projects(frame, area, ctx, state),
    }
}

/// Breadcrumb navigation path segments
pub struct Breadcrumb {
    segments: Vec<String>,
}

impl Breadcrumb {
    /// Create a new breadcrumb with the root "Logdog" segment
    pub fn new() -> Self {
        Self {
            segments: vec!["Logdog".to_string()],
        }
    }

    /// Add a segment to the breadcrumb path
    pub fn push(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Path to a log list: the local project or a named global project
    pub fn for_source(source: &LogSource) -> Self {
        match source {
            LogSource::Local => Self::new().push(Screen::LogList.title()),
            LogSource::Global(project) => Self::new()
                .push(Screen::GlobalProjectSelect.title())
                .push(project.as_str()),
        }
    }

    /// Format the breadcrumb as a display string with " > " separators
    pub fn display(&self) -> String {
        self.segments.join(" > ")
    }

    /// Format the breadcrumb with an optional suffix (e.g., status info)
    pub fn display_with_suffix(&self, suffix: &str) -> String {
        if suffix.is_empty() {
            self.display()
        } else {
            format!("{} {}", self.display(), suffix)
        }
    }
}

impl Default for Breadcrumb {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the transient status message, if any
pub(crate) fn render_status(frame: &mut Frame, area: Option<Rect>, message: Option<&str>) {
    if let (Some(area), Some(message)) = (area, message) {
        let status = Paragraph::new(message).style(theme().status_style(message));
        frame.render_widget(status, area);
    }
}

/// Render the key hint footer
pub(crate) fn render_footer(frame: &mut Frame, area: Rect, hint: &str) {
    let footer = Paragraph::new(hint)
        .style(theme().muted_style())
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}
