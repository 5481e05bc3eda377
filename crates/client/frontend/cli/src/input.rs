//! Keyboard mapping for the CLI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Semantic actions derived from raw key events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextTab,
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    Backspace,
    Restart,
    Buy,
    ResetBudget,
    Refresh,
    OpenLanguages,
    EditField,
    Char(char),
}

/// Maps key events to actions, aware of whether a text field is capturing.
pub struct InputHandler;

impl InputHandler {
    pub fn map(key: KeyEvent, editing: bool) -> Option<KeyAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // While a text field is focused, printable keys are input.
        if editing {
            return match key.code {
                KeyCode::Esc => Some(KeyAction::Cancel),
                KeyCode::Enter => Some(KeyAction::Confirm),
                KeyCode::Backspace => Some(KeyAction::Backspace),
                KeyCode::Char(c) => Some(KeyAction::Char(c)),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(KeyAction::Quit),
            KeyCode::Tab => Some(KeyAction::NextTab),
            KeyCode::Up => Some(KeyAction::Up),
            KeyCode::Down => Some(KeyAction::Down),
            KeyCode::Left => Some(KeyAction::Left),
            KeyCode::Right => Some(KeyAction::Right),
            KeyCode::Enter => Some(KeyAction::Confirm),
            KeyCode::Esc => Some(KeyAction::Cancel),
            KeyCode::Backspace => Some(KeyAction::Backspace),
            KeyCode::Char('r') => Some(KeyAction::Restart),
            KeyCode::Char('b') => Some(KeyAction::Buy),
            KeyCode::Char('x') => Some(KeyAction::ResetBudget),
            KeyCode::Char('n') => Some(KeyAction::Refresh),
            KeyCode::Char('l') => Some(KeyAction::OpenLanguages),
            KeyCode::Char('i') => Some(KeyAction::EditField),
            KeyCode::Char(c) => Some(KeyAction::Char(c)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn editing_mode_captures_printable_keys() {
        assert_eq!(
            InputHandler::map(press(KeyCode::Char('q')), true),
            Some(KeyAction::Char('q'))
        );
        assert_eq!(
            InputHandler::map(press(KeyCode::Char('q')), false),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            InputHandler::map(press(KeyCode::Esc), true),
            Some(KeyAction::Cancel)
        );
    }
}
