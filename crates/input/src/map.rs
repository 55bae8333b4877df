//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Digit keys roll that many pins, `x` rolls a strike, and `r` restarts.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Rolls
        KeyCode::Char(c @ '0'..='9') => Some(GameAction::Roll(c as u8 - b'0')),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::Roll(10)),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the scoreboard.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
