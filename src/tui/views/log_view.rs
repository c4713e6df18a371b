//! Log viewer view
//!
//! Displays the formatted lines of one log file with scrolling and colored levels.

use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

use crate::app::{Screen, UiState};
use crate::formatter::RenderedLine;
use crate::store;
use crate::tui::header::Header;
use crate::tui::layout::ScreenLayout;
use crate::tui::theme::{theme, Theme};
use crate::tui::views::{render_footer, render_status, Breadcrumb};

/// Styled spans for one formatted line, separated by single spaces
pub fn line_spans<'a>(line: &'a RenderedLine, t: &Theme) -> Line<'a> {
    let mut spans = Vec::with_capacity(line.segments.len() * 2);
    for (i, segment) in line.segments.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            segment.text.as_str(),
            t.emphasis_style(segment.emphasis),
        ));
    }
    Line::from(spans)
}

/// Render the log viewer; the cursor is the first visible line
pub fn render_log_view(frame: &mut Frame, area: Rect, state: &UiState) {
    let t = theme();
    let lines = &state.log_content;
    let line_count = lines.len();

    let name = state
        .viewing
        .as_deref()
        .map(store::display_name)
        .unwrap_or_default();
    let breadcrumb = Breadcrumb::for_source(&state.log_source).push(Screen::LogView.title());
    let header =
        Header::new(breadcrumb).with_suffix(format!("- {} ({} entries)", name, line_count));
    let areas = ScreenLayout::new(area)
        .with_header(header)
        .with_status(state.message.is_some())
        .render(frame);

    let visible_height = areas.content.height.saturating_sub(2) as usize;
    let scroll = state.cursor.min(line_count.saturating_sub(1));

    if lines.is_empty() {
        let empty = Paragraph::new("Log file is empty.")
            .style(t.muted_style())
            .block(Block::default().borders(Borders::ALL).title(name.as_str()));
        frame.render_widget(empty, areas.content);
    } else {
        let items: Vec<ListItem> = lines
            .iter()
            .skip(scroll)
            .take(visible_height)
            .map(|line| ListItem::new(line_spans(line, t)))
            .collect();

        let title = format!(
            "{} [{}-{} of {}]",
            name,
            scroll + 1,
            (scroll + items.len()).min(line_count),
            line_count
        );
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(list, areas.content);

        if line_count > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            let mut scrollbar_state = ScrollbarState::new(line_count)
                .position(scroll)
                .viewport_content_length(visible_height);

            // Inside the right border
            let scrollbar_area = Rect {
                x: areas.content.x + areas.content.width.saturating_sub(1),
                y: areas.content.y + 1,
                width: 1,
                height: areas.content.height.saturating_sub(2),
            };
            frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
        }
    }

    render_status(frame, areas.status, state.message.as_deref());
    render_footer(frame, areas.footer, "↑/k ↓/j: scroll | Esc: back | q: quit");
}
