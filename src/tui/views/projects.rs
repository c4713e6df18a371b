//! Global project selection view
//!
//! Lists the project directories found under the global log root.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::app::{ProjectContext, Screen, UiState};
use crate::tui::header::Header;
use crate::tui::layout::ScreenLayout;
use crate::tui::theme::theme;
use crate::tui::views::{render_footer, render_status, Breadcrumb};
use crate::tui::widgets::selection::{selection_prefix, selection_style_with_accent};

/// Render the global project list
pub fn render_global_projects(
    frame: &mut Frame,
    area: Rect,
    ctx: &ProjectContext,
    state: &UiState,
) {
    let t = theme();

    let root = ctx
        .global_root
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let header = Header::new(Breadcrumb::new().push(Screen::GlobalProjectSelect.title()))
        .with_suffix(format!("({} projects)", state.global_projects.len()))
        .with_right(root.clone());
    let areas = ScreenLayout::new(area)
        .with_header(header)
        .with_status(true)
        .render(frame);

    if state.global_projects.is_empty() {
        let text = if root.is_empty() {
            "No global log root (home directory unknown).".to_string()
        } else {
            format!("No projects found in {}", root)
        };
        let empty = Paragraph::new(text)
            .style(t.muted_style())
            .block(Block::default().borders(Borders::ALL).title("Projects"));
        frame.render_widget(empty, areas.content);
    } else {
        let items: Vec<ListItem> = state
            .global_projects
            .iter()
            .enumerate()
            .map(|(i, project)| {
                let is_selected = i == state.cursor;
                ListItem::new(Line::from(vec![
                    Span::raw(selection_prefix(is_selected)),
                    Span::styled(project.as_str(), selection_style_with_accent(is_selected, t)),
                ]))
            })
            .collect();

        // Scrolls the list so the cursor row stays visible
        let mut list_state = ListState::default();
        list_state.select(Some(state.cursor));
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Projects"));
        frame.render_stateful_widget(list, areas.content, &mut list_state);
    }

    render_status(frame, areas.status, state.message.as_deref());
    render_footer(
        frame,
        areas.footer,
        "↑/k ↓/j: navigate | Enter: view logs | Esc: back | q: quit",
    );
}
