//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a terminal key event means to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// A named key press, matched against the key bindings
    Press(String),
    /// Esc or Ctrl-C: the player closed the game
    Quit,
    Ignore,
}

/// Classify a key event
pub fn classify(event: &KeyEvent) -> KeyAction {
    if event.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }

    match event.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Up => KeyAction::Press("Up".to_string()),
        KeyCode::Down => KeyAction::Press("Down".to_string()),
        KeyCode::Char(c) => KeyAction::Press(c.to_string()),
        _ => KeyAction::Ignore,
    }
}
