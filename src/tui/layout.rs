//! Screen layout helper
//!
//! Splits a screen into header, content, an optional status line and the footer,
//! rendering the header on the way.

use ratatui::prelude::*;

use crate::tui::header::{Header, HEADER_HEIGHT};

/// Footer height (including top border)
pub const FOOTER_HEIGHT: u16 = 3;

/// Height of the status message line
pub const STATUS_HEIGHT: u16 = 1;

/// Screen layout builder
pub struct ScreenLayout {
    /// Total area for the screen
    area: Rect,
    /// Header to render (optional, but typically present)
    header: Option<Header>,
    /// Reserve a line for the status message
    status: bool,
}

impl ScreenLayout {
    /// Create a new screen layout for the given area
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            header: None,
            status: false,
        }
    }

    /// Add a header to the layout
    pub fn with_header(mut self, header: Header) -> Self {
        self.header = Some(header);
        self
    }

    /// Reserve a status line above the footer
    pub fn with_status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    /// Render the header (if present) and return layout areas
    pub fn render(self, frame: &mut Frame) -> LayoutAreas {
        let mut constraints = Vec::new();
        if self.header.is_some() {
            constraints.push(Constraint::Length(HEADER_HEIGHT));
        }
        constraints.push(Constraint::Min(0)); // Content
        if self.status {
            constraints.push(Constraint::Length(STATUS_HEIGHT));
        }
        constraints.push(Constraint::Length(FOOTER_HEIGHT));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(self.area);

        let mut chunks = chunks.iter().copied();

        let header = match self.header {
            Some(header) => {
                let area = chunks.next().unwrap_or_default();
                header.render(frame, area);
                Some(area)
            }
            None => None,
        };
        let content = chunks.next().unwrap_or_default();
        let status = if self.status { chunks.next() } else { None };
        let footer = chunks.next().unwrap_or_default();

        LayoutAreas {
            header,
            content,
            status,
            footer,
        }
    }
}

/// Areas calculated by ScreenLayout
#[derive(Debug, Clone, Copy)]
pub struct LayoutAreas {
    /// Header area (if header was present)
    pub header: Option<Rect>,
    /// Main content area
    pub content: Rect,
    /// Status line (if reserved)
    pub status: Option<Rect>,
    /// Footer area
    pub footer: Rect,
}
