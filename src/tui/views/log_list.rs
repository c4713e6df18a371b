//! Log file list view
//!
//! One row per log file with its entry count, plus the delete and clear
//! confirmations layered on top.

use std::path::Path;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::app::{Confirmation, UiState};
use crate::store;
use crate::tui::header::Header;
use crate::tui::layout::ScreenLayout;
use crate::tui::theme::theme;
use crate::tui::views::{
    render_confirm_dialog, render_footer, render_status, Breadcrumb, ConfirmDialogConfig,
};
use crate::tui::widgets::selection::{selection_prefix, selection_style_with_accent};

/// Format one row: file name padded to 25 columns, entry count right-aligned
pub fn log_row(path: &Path) -> String {
    format!(
        "{:<25} {:>8} entries",
        store::display_name(path),
        store::count_entries(path)
    )
}

/// Render the log file list
pub fn render_log_list(frame: &mut Frame, area: Rect, state: &UiState) {
    let t = theme();

    let header = Header::new(Breadcrumb::for_source(&state.log_source))
        .with_suffix(format!("({} files)", state.log_files.len()))
        .with_right(format!("retention: {} days", state.retention_days));
    let areas = ScreenLayout::new(area)
        .with_header(header)
        .with_status(true)
        .render(frame);

    if state.log_files.is_empty() {
        let empty = Paragraph::new("No log files found.")
            .style(t.muted_style())
            .block(Block::default().borders(Borders::ALL).title("Log Files"));
        frame.render_widget(empty, areas.content);
    } else {
        // Entry counts are read from disk on every draw
        let items: Vec<ListItem> = state
            .log_files
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let is_selected = i == state.cursor;
                ListItem::new(Line::from(vec![
                    Span::raw(selection_prefix(is_selected)),
                    Span::styled(log_row(path), selection_style_with_accent(is_selected, t)),
                ]))
            })
            .collect();

        // Scrolls the list so the cursor row stays visible
        let mut list_state = ListState::default();
        list_state.select(Some(state.cursor));
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Log Files"));
        frame.render_stateful_widget(list, areas.content, &mut list_state);
    }

    render_status(frame, areas.status, state.message.as_deref());
    render_footer(
        frame,
        areas.footer,
        "↑/k ↓/j: navigate | v: view | d: delete | c: clear old logs | Esc: back | q: quit",
    );

    match state.pending {
        Some(Confirmation::Delete { index }) => {
            let name = state
                .log_files
                .get(index)
                .map(|p| store::display_name(p))
                .unwrap_or_default();
            render_confirm_dialog(
                frame,
                area,
                ConfirmDialogConfig {
                    title: "Confirm Delete",
                    item_label: "log file",
                    item_name: &name,
                    warnings: vec![],
                },
            );
        }
        Some(Confirmation::ClearOld { count }) => {
            let label = format!("log files older than {} days", state.retention_days);
            let name = count.to_string();
            render_confirm_dialog(
                frame,
                area,
                ConfirmDialogConfig {
                    title: "Confirm Clear",
                    item_label: &label,
                    item_name: &name,
                    warnings: vec!["This cannot be undone".to_string()],
                },
            );
        }
        None => {}
    }
}
