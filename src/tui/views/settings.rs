//! Settings view
//!
//! Adjustable retention plus the read-only logger configuration used by install.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{ProjectContext, Screen, UiState};
use crate::config::{MAX_RETENTION_DAYS, MIN_RETENTION_DAYS};
use crate::tui::header::Header;
use crate::tui::layout::ScreenLayout;
use crate::tui::theme::theme;
use crate::tui::views::{render_footer, render_status, Breadcrumb};

fn setting_line<'a>(label: &'a str, value: String) -> Line<'a> {
    let t = theme();
    Line::from(vec![
        Span::styled(format!("  {:<14}", label), Style::default().fg(t.text)),
        Span::styled(value, Style::default().fg(t.accent)),
    ])
}

/// Render the settings screen
pub fn render_settings(frame: &mut Frame, area: Rect, ctx: &ProjectContext, state: &UiState) {
    let t = theme();

    let header = Header::new(Breadcrumb::new().push(Screen::Settings.title()));
    let areas = ScreenLayout::new(area)
        .with_header(header)
        .with_status(true)
        .render(frame);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(areas.content);

    let retention = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("  Log Retention: ", Style::default().fg(t.text)),
            Span::styled(
                format!("{} days", state.retention_days),
                t.selected_style().fg(t.accent),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "  Use +/- to adjust ({}-{} days)",
                MIN_RETENTION_DAYS, MAX_RETENTION_DAYS
            ),
            t.muted_style(),
        )),
    ])
    .block(Block::default().borders(Borders::ALL).title("Retention"));
    frame.render_widget(retention, chunks[0]);

    let global_root = ctx
        .global_root
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(unavailable)".to_string());
    let logger = &ctx.logger;
    let config = Paragraph::new(vec![
        setting_line("Log level", logger.log_level.clone()),
        setting_line("Output dir", logger.output_dir.clone()),
        setting_line("Max files", logger.max_files.to_string()),
        setting_line("Date format", logger.date_format.clone()),
        setting_line("Global root", global_root),
    ])
    .block(Block::default().borders(Borders::ALL).title("Logger"));
    frame.render_widget(config, chunks[1]);

    render_status(frame, areas.status, state.message.as_deref());
    render_footer(frame, areas.footer, "+/=: increase | -/_: decrease | Esc: back | q: quit");
}
