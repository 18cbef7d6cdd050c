//! Key mapping from terminal events to game commands.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    ToggleGhost,
    Restart,
}

/// Map keyboard input to game commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    let action = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Action::MoveLeft
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Action::MoveRight
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Action::MoveDown
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Action::RotateCw,
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char('y') | KeyCode::Char('Y') => {
            Action::RotateCcw
        }

        KeyCode::Char(' ') => Action::HardDrop,

        // Session
        KeyCode::Char('g') | KeyCode::Char('G') => return Some(Command::ToggleGhost),
        KeyCode::Char('r') | KeyCode::Char('R') => return Some(Command::Restart),

        _ => return None,
    };
    Some(Command::Play(action))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(code: KeyCode) -> Option<Command> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(map(KeyCode::Left), Some(Command::Play(Action::MoveLeft)));
        assert_eq!(map(KeyCode::Right), Some(Command::Play(Action::MoveRight)));
        assert_eq!(map(KeyCode::Down), Some(Command::Play(Action::MoveDown)));

        assert_eq!(map(KeyCode::Char('H')), Some(Command::Play(Action::MoveLeft)));
        assert_eq!(map(KeyCode::Char('L')), Some(Command::Play(Action::MoveRight)));
        assert_eq!(map(KeyCode::Char('J')), Some(Command::Play(Action::MoveDown)));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(map(KeyCode::Up), Some(Command::Play(Action::RotateCw)));
        assert_eq!(map(KeyCode::Char('x')), Some(Command::Play(Action::RotateCw)));
        assert_eq!(map(KeyCode::Char('z')), Some(Command::Play(Action::RotateCcw)));
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(map(KeyCode::Char(' ')), Some(Command::Play(Action::HardDrop)));
        assert_eq!(map(KeyCode::Char('g')), Some(Command::ToggleGhost));
        assert_eq!(map(KeyCode::Char('R')), Some(Command::Restart));
        assert_eq!(map(KeyCode::Char('c')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
