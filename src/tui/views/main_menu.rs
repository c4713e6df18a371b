//! Main menu view
//!
//! Detected project status plus the top-level menu.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::app::{ProjectContext, UiState, MAIN_MENU};
use crate::tui::header::Header;
use crate::tui::layout::ScreenLayout;
use crate::tui::theme::theme;
use crate::tui::views::{render_footer, render_status, Breadcrumb};
use crate::tui::widgets::selection::{selection_prefix, selection_style_with_accent};

/// One-line description of what was detected in the working directory
pub fn project_status(ctx: &ProjectContext, log_count: usize) -> String {
    match ctx.language_name() {
        Some(name) => {
            let mut status = format!(
                "Detected: {} project in {}",
                name,
                ctx.project_path.display()
            );
            if log_count > 0 {
                status.push_str(&format!(" ({} log files)", log_count));
            }
            status
        }
        None => format!(
            "No supported project detected in {}",
            ctx.project_path.display()
        ),
    }
}

/// Render the main menu
pub fn render_main_menu(frame: &mut Frame, area: Rect, ctx: &ProjectContext, state: &UiState) {
    let t = theme();

    let header = Header::new(Breadcrumb::new())
        .with_right(ctx.language_name().unwrap_or("no project"));
    let areas = ScreenLayout::new(area)
        .with_header(header)
        .with_status(true)
        .render(frame);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(areas.content);

    let status = Paragraph::new(project_status(ctx, state.log_files.len()))
        .style(Style::default().fg(t.text));
    frame.render_widget(status, chunks[0]);

    let items: Vec<ListItem> = MAIN_MENU
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == state.cursor;
            ListItem::new(Line::from(vec![
                Span::raw(selection_prefix(is_selected)),
                Span::styled(item.label(), selection_style_with_accent(is_selected, t)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border))
            .title("Menu"),
    );
    frame.render_widget(list, chunks[1]);

    render_status(frame, areas.status, state.message.as_deref());
    render_footer(frame, areas.footer, "↑/k ↓/j: navigate | Enter: select | q: quit");
}
