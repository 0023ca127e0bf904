//! Key mapping for the start menu.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::should_quit;

/// Keys the start menu understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    /// `0`-`9`.
    Digit(u8),
    Enter,
    Backspace,
    Escape,
    /// Ctrl-C.
    Interrupt,
}

pub fn menu_key(key: KeyEvent) -> Option<MenuKey> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) && key.code != KeyCode::Esc {
        return Some(MenuKey::Interrupt);
    }

    match key.code {
        KeyCode::Char(c) => c.to_digit(10).map(|d| MenuKey::Digit(d as u8)),
        KeyCode::Enter => Some(MenuKey::Enter),
        KeyCode::Backspace => Some(MenuKey::Backspace),
        KeyCode::Esc => Some(MenuKey::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn digits_and_editing_keys() {
        assert_eq!(menu_key(KeyEvent::from(KeyCode::Char('7'))), Some(MenuKey::Digit(7)));
        assert_eq!(menu_key(KeyEvent::from(KeyCode::Char('0'))), Some(MenuKey::Digit(0)));
        assert_eq!(menu_key(KeyEvent::from(KeyCode::Enter)), Some(MenuKey::Enter));
        assert_eq!(menu_key(KeyEvent::from(KeyCode::Backspace)), Some(MenuKey::Backspace));
        assert_eq!(menu_key(KeyEvent::from(KeyCode::Esc)), Some(MenuKey::Escape));
        assert_eq!(menu_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_interrupts() {
        assert_eq!(
            menu_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(MenuKey::Interrupt)
        );
    }
}
