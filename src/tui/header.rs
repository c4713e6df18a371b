//! Unified header component
//!
//! Breadcrumb on the left, optional right-aligned context (e.g. detected language).

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::theme::theme;
use crate::tui::views::Breadcrumb;

/// Height constant for the header (including bottom border)
pub const HEADER_HEIGHT: u16 = 3;

/// Unified header component for all views
pub struct Header {
    /// Breadcrumb navigation path
    breadcrumb: Breadcrumb,
    /// Optional suffix text (e.g., "(12 entries)")
    suffix: Option<String>,
    /// Right-aligned context text
    right: Option<String>,
}

impl Header {
    /// Create a new header with the given breadcrumb
    pub fn new(breadcrumb: Breadcrumb) -> Self {
        Self {
            breadcrumb,
            suffix: None,
            right: None,
        }
    }

    /// Add a suffix to the header (e.g., entry counts)
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        let s = suffix.into();
        if !s.is_empty() {
            self.suffix = Some(s);
        }
        self
    }

    /// Add right-aligned text
    pub fn with_right(mut self, text: impl Into<String>) -> Self {
        let s = text.into();
        if !s.is_empty() {
            self.right = Some(s);
        }
        self
    }

    /// Render the header to the given area
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let left_text = match &self.suffix {
            Some(suffix) => self.breadcrumb.display_with_suffix(suffix),
            None => self.breadcrumb.display(),
        };
        let right_text = self.right.clone().unwrap_or_default();

        let width = area.width as usize;
        let padding = width.saturating_sub(left_text.chars().count() + right_text.chars().count());

        let mut line_spans = vec![Span::raw(left_text)];
        if !right_text.is_empty() {
            line_spans.push(Span::raw(" ".repeat(padding)));
            line_spans.push(Span::styled(right_text, t.muted_style()));
        }

        let paragraph = Paragraph::new(Line::from(line_spans))
            .style(t.header_style())
            .block(Block::default().borders(Borders::BOTTOM));

        frame.render_widget(paragraph, area);
    }
}
