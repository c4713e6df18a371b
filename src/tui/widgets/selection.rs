//! Helper functions for consistent selection rendering across all lists.
//!
//! Selected items get an arrow prefix and bold accent text; there is no background
//! highlighting.

use ratatui::style::{Style, Stylize};

use crate::tui::theme::Theme;

/// Returns the selection prefix for a list item.
///
/// Selected items get an arrow (`▶ `), unselected items get two spaces for alignment.
pub fn selection_prefix(is_selected: bool) -> &'static str {
    if is_selected {
        "▶ "
    } else {
        "  "
    }
}

/// Returns a style for a selected/unselected item using theme colors.
///
/// Selected items are bold with the accent color. Unselected items use the default text color.
pub fn selection_style_with_accent(is_selected: bool, theme: &Theme) -> Style {
    if is_selected {
        Style::default().fg(theme.accent).bold()
    } else {
        Style::default().fg(theme.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;

    #[test]
    fn test_selection_prefix() {
        assert_eq!(selection_prefix(true), "▶ ");
        assert_eq!(selection_prefix(false), "  ");
    }

    #[test]
    fn test_selection_style_with_accent() {
        let theme = Theme::dark();
        let selected = selection_style_with_accent(true, &theme);
        let unselected = selection_style_with_accent(false, &theme);

        assert_eq!(selected.fg, Some(theme.accent));
        assert_eq!(unselected.fg, Some(theme.text));
        assert!(selected.add_modifier.contains(Modifier::BOLD));
        assert!(!unselected.add_modifier.contains(Modifier::BOLD));
    }
}
