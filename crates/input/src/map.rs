//! Key mapping from terminal events to UI actions.
//!
//! A move is entered as three picks: source shelf, slot, target shelf.
//! The number row addresses up to twelve shelves: 1-9 and 0 for the first
//! ten, then '-' and '=' for the last two. Slot picks reuse keys 1-3.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use goods_sort_types::UiAction;

/// Map keyboard input to UI actions.
pub fn map_key(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => Some(UiAction::Pick(c as usize - '1' as usize)),
        KeyCode::Char('0') => Some(UiAction::Pick(9)),
        KeyCode::Char('-') => Some(UiAction::Pick(10)),
        KeyCode::Char('=') => Some(UiAction::Pick(11)),

        KeyCode::Esc => Some(UiAction::Cancel),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_number_row_picks() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('1'))),
            Some(UiAction::Pick(0))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('9'))),
            Some(UiAction::Pick(8))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('0'))),
            Some(UiAction::Pick(9))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('-'))),
            Some(UiAction::Pick(10))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('='))),
            Some(UiAction::Pick(11))
        );
    }

    #[test]
    fn test_cancel_and_restart() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(UiAction::Cancel));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(UiAction::Restart)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('R'))),
            Some(UiAction::Restart)
        );
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
