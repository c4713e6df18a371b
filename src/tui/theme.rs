//! Theme module for centralized color and style definitions
//!
//! Semantic colors for log levels, status messages and UI chrome.

use ratatui::style::{Color, Modifier, Style};

use crate::formatter::{Emphasis, LogLevel};

/// Application theme with all color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    // === Log Levels ===
    pub level_debug: Color,
    pub level_info: Color,
    pub level_warn: Color,
    pub level_error: Color,
    /// Unknown level strings
    pub level_other: Color,

    // === Log Line Parts ===
    pub timestamp: Color,
    pub data: Color,

    // === UI Elements ===
    /// Primary accent color (headers, titles)
    pub accent: Color,
    /// Text color for normal content
    pub text: Color,
    /// Text color for muted/secondary content
    pub text_muted: Color,
    /// Color for selected/focused items
    pub selected: Color,

    // === Status Line ===
    pub status_success: Color,
    pub status_error: Color,
    /// Informational status and prompts
    pub status_info: Color,

    // === Borders ===
    /// Normal border color
    pub border: Color,
    /// Warning border color (confirmation dialogs)
    pub border_warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            level_debug: Color::Gray,
            level_info: Color::Blue,
            level_warn: Color::Yellow,
            level_error: Color::Red,
            level_other: Color::White,

            timestamp: Color::DarkGray,
            data: Color::Cyan,

            accent: Color::Cyan,
            text: Color::White,
            text_muted: Color::DarkGray,
            selected: Color::White,

            status_success: Color::Green,
            status_error: Color::Red,
            status_info: Color::Yellow,

            border: Color::White,
            border_warning: Color::Yellow,
        }
    }

    /// Get the color for a log level
    pub fn level_color(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Debug => self.level_debug,
            LogLevel::Info => self.level_info,
            LogLevel::Warn => self.level_warn,
            LogLevel::Error => self.level_error,
            LogLevel::Other => self.level_other,
        }
    }

    /// Style for one part of a formatted log line
    pub fn emphasis_style(&self, emphasis: Emphasis) -> Style {
        match emphasis {
            Emphasis::Timestamp => Style::default().fg(self.timestamp),
            Emphasis::Level(level) => Style::default()
                .fg(self.level_color(level))
                .add_modifier(Modifier::BOLD),
            Emphasis::Message => Style::default().fg(self.text),
            Emphasis::Data => Style::default().fg(self.data),
            Emphasis::Raw => Style::default().fg(self.text),
        }
    }

    /// Style for a status message, chosen by its leading marker
    pub fn status_style(&self, message: &str) -> Style {
        let color = if message.starts_with(crate::app::FAILURE_MARK) {
            self.status_error
        } else if message.starts_with(crate::app::SUCCESS_MARK) {
            self.status_success
        } else {
            self.status_info
        };
        Style::default().fg(color)
    }

    // === Style Builders ===

    /// Style for headers/titles
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for muted text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for selected items
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected)
            .add_modifier(Modifier::BOLD)
    }
}

/// Global theme instance
static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

/// Get the current theme
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Cyan);
        assert_eq!(theme.level_error, Color::Red);
    }

    #[test]
    fn test_level_color() {
        let theme = Theme::dark();
        assert_eq!(theme.level_color(LogLevel::Debug), Color::Gray);
        assert_eq!(theme.level_color(LogLevel::Info), Color::Blue);
        assert_eq!(theme.level_color(LogLevel::Warn), Color::Yellow);
        assert_eq!(theme.level_color(LogLevel::Error), Color::Red);
        assert_eq!(theme.level_color(LogLevel::Other), Color::White);
    }

    #[test]
    fn test_status_style() {
        let theme = Theme::dark();
        assert_eq!(theme.status_style("✓ Deleted a.json").fg, Some(Color::Green));
        assert_eq!(theme.status_style("✗ Install failed").fg, Some(Color::Red));
        assert_eq!(theme.status_style("Retention set to 8 days").fg, Some(Color::Yellow));
    }

    #[test]
    fn test_global_theme() {
        let t = theme();
        assert_eq!(t.accent, Color::Cyan);
    }
}
