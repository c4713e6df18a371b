//! Key translation
//!
//! Maps crossterm key events onto [`Key`], folding aliases (arrows and j/k,
//! q and Ctrl+C) so the transition table only sees one spelling of each key.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key press as seen by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Esc,
    /// `q` or Ctrl+C
    Quit,
    /// Any other printable character
    Char(char),
    /// Keys with no binding anywhere (function keys, tab, ...)
    Other,
}

/// Translate a terminal key event
///
/// Returns None for release/repeat events.
pub fn translate_key(key: KeyEvent) -> Option<Key> {
    // Only process key press events (not release/repeat)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(match key.code {
            KeyCode::Char('c') => Key::Quit,
            _ => Key::Other,
        });
    }

    Some(match key.code {
        KeyCode::Up | KeyCode::Char('k') => Key::Up,
        KeyCode::Down | KeyCode::Char('j') => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Char('q') => Key::Quit,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_aliases() {
        assert_eq!(translate_key(press(KeyCode::Up)), Some(Key::Up));
        assert_eq!(translate_key(press(KeyCode::Char('k'))), Some(Key::Up));
        assert_eq!(translate_key(press(KeyCode::Down)), Some(Key::Down));
        assert_eq!(translate_key(press(KeyCode::Char('j'))), Some(Key::Down));
    }

    #[test]
    fn test_quit_aliases() {
        assert_eq!(translate_key(press(KeyCode::Char('q'))), Some(Key::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate_key(ctrl_c), Some(Key::Quit));
    }

    #[test]
    fn test_plain_characters() {
        assert_eq!(translate_key(press(KeyCode::Char('c'))), Some(Key::Char('c')));
        assert_eq!(translate_key(press(KeyCode::Char('+'))), Some(Key::Char('+')));
        assert_eq!(translate_key(press(KeyCode::Tab)), Some(Key::Other));
    }

    #[test]
    fn test_release_events_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('y'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate_key(release), None);
    }
}
