//! Unified confirmation dialog component
//!
//! Provides a consistent look for the destructive-action confirmations.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::theme::theme;

/// Default dialog size
const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 9;

/// Configuration for a confirmation dialog
pub struct ConfirmDialogConfig<'a> {
    /// Dialog title (e.g., "Confirm Delete")
    pub title: &'a str,
    /// Label for the item type (e.g., "log file")
    pub item_label: &'a str,
    /// Name of the item being acted on
    pub item_name: &'a str,
    /// Warning lines (displayed in yellow with ⚠ prefix)
    pub warnings: Vec<String>,
}

/// Center a dialog of at most `width` x `height` inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render a confirmation dialog centered over `area`
///
/// - Border: Yellow (warning color, indicates destructive action)
/// - Item name: Cyan + Bold
/// - Warnings: Yellow + Bold with ⚠ prefix
/// - Prompt: "Press y to confirm, any other key to cancel"
pub fn render_confirm_dialog(frame: &mut Frame, area: Rect, config: ConfirmDialogConfig) {
    let t = theme();
    let dialog_area = centered_rect(area, DIALOG_WIDTH, DIALOG_HEIGHT);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("Delete {}: ", config.item_label),
                Style::default().fg(t.text),
            ),
            Span::styled(
                config.item_name,
                Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled("?", Style::default().fg(t.text)),
        ]),
        Line::from(""),
    ];

    for warning in &config.warnings {
        lines.push(Line::from(Span::styled(
            format!("⚠  {}", warning),
            Style::default()
                .fg(t.border_warning)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Press ", Style::default().fg(t.text)),
        Span::styled(
            "y",
            Style::default()
                .fg(t.status_success)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to confirm, ", Style::default().fg(t.text)),
        Span::styled(
            "any other key",
            Style::default()
                .fg(t.status_error)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to cancel", Style::default().fg(t.text)),
    ]));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border_warning))
            .title(config.title),
    );

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(paragraph, dialog_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(area, 60, 9);
        assert_eq!(rect, Rect::new(10, 7, 60, 9));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 40, 6);
        let rect = centered_rect(area, 60, 9);
        assert_eq!(rect, Rect::new(5, 5, 40, 6));
    }
}
