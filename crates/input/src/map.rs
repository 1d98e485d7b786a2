//! Key mapping from terminal events to the three device buttons.

use crate::types::Button;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the button it stands in for.
pub fn button_for_key(key: KeyEvent) -> Option<Button> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Button::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Button::MoveRight)
        }
        KeyCode::Up
        | KeyCode::Char(' ')
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Button::Rotate),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Left)), Some(Button::MoveLeft));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Right)), Some(Button::MoveRight));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Char('H'))), Some(Button::MoveLeft));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Char('d'))), Some(Button::MoveRight));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Up)), Some(Button::Rotate));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Char(' '))), Some(Button::Rotate));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Char('W'))), Some(Button::Rotate));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Down)), None);
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
