//! Crossterm key events to terminal key input.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::terminal::KeyInput;

/// Map a crossterm key event to a [`KeyInput`].
///
/// Only key presses are mapped. Ctrl+C behaves like Escape so the game can
/// always be left.
pub fn map_key(key: KeyEvent) -> Option<KeyInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyInput::Escape)
        }
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char(ch) => Some(KeyInput::Char {
            ch,
            shift: key.modifiers.contains(KeyModifiers::SHIFT),
        }),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Esc => Some(KeyInput::Escape),
        _ => None,
    }
}
