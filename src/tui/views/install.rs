//! Install view
//!
//! Shows what the install will create before the user confirms with Enter.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{ProjectContext, Screen, UiState};
use crate::tui::header::Header;
use crate::tui::layout::ScreenLayout;
use crate::tui::theme::theme;
use crate::tui::views::{render_footer, render_status, Breadcrumb};

/// Render the install screen
pub fn render_install(frame: &mut Frame, area: Rect, ctx: &ProjectContext, state: &UiState) {
    let t = theme();

    let header = Header::new(Breadcrumb::new().push(Screen::Install.title()));
    let areas = ScreenLayout::new(area)
        .with_header(header)
        .with_status(true)
        .render(frame);

    let lines = match ctx.language {
        Some(lang) => vec![
            Line::from(Span::styled(
                format!("Install logger for {} project", lang.name()),
                t.header_style(),
            )),
            Line::from(""),
            Line::from("This will create:"),
            Line::from(format!("  - {}", lang.logger_file())),
            Line::from(format!("  - {}/ directory", ctx.logger.output_dir)),
            Line::from(""),
            Line::from(Span::styled(
                "An existing logger file is overwritten.",
                Style::default().fg(t.border_warning),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "No supported language detected.",
            Style::default().fg(t.status_error),
        ))],
    };

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Install"));
    frame.render_widget(body, areas.content);

    render_status(frame, areas.status, state.message.as_deref());
    render_footer(frame, areas.footer, "Enter: install | Esc: back | q: quit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggerConfig;
    use crate::detector::GoLanguage;
    use crate::tui::views::test_support::render_text;
    use std::path::PathBuf;

    fn install_state() -> UiState {
        let mut state = UiState::default();
        state.screen = Screen::Install;
        state
    }

    #[test]
    fn test_render_install_plan() {
        let ctx = ProjectContext {
            project_path: PathBuf::from("/work/app"),
            language: Some(&GoLanguage),
            logger: LoggerConfig::default(),
            global_root: None,
        };
        let text = render_text(&ctx, &install_state());
        assert!(text.contains("Logdog > Install"));
        assert!(text.contains("Install logger for Go project"));
        assert!(text.contains("internal/logdog/logger.go"));
        assert!(text.contains("logdog/logs/ directory"));
    }

    #[test]
    fn test_render_without_language() {
        let ctx = ProjectContext {
            project_path: PathBuf::from("/work/app"),
            language: None,
            logger: LoggerConfig::default(),
            global_root: None,
        };
        let text = render_text(&ctx, &install_state());
        assert!(text.contains("No supported language detected."));
    }
}
