//! Key mapping from terminal events to player actions.

use crate::types::PlayerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to player actions.
///
/// Release events (reported by some terminals) map to nothing, so a key is
/// acted on once per press.
pub fn handle_key_event(key: KeyEvent) -> Option<PlayerAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if is_ctrl_c(key) {
        return Some(PlayerAction::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(PlayerAction::Forward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(PlayerAction::Backward),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(PlayerAction::StrafeLeft),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(PlayerAction::StrafeRight),

        // Rotation
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(PlayerAction::RotateLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(PlayerAction::RotateRight),

        KeyCode::Char(' ') => Some(PlayerAction::Interact),
        KeyCode::Esc => Some(PlayerAction::Quit),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release && (key.code == KeyCode::Esc || is_ctrl_c(key))
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
