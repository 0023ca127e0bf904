//! Start menu: pick a new random dungeon, enter a seed, or exit.
//!
//! [`Menu`] is a pure state machine driven by [`MenuKey`]s; drawing goes into
//! a framebuffer like the rest of the game, so nothing here touches the
//! terminal.

use crate::input::MenuKey;
use crate::term::{Cell, CellStyle, FrameBuffer, Shade, Viewport};

/// A `u64` never needs more digits than this.
const MAX_SEED_DIGITS: usize = 20;

const TITLE: &str = "=== ASCII Dungeon Crawler ===";
const OPTIONS: [&str; 3] = ["1. Start New Game", "2. Load Game with Seed", "3. Exit"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuScreen {
    Main,
    SeedEntry { input: String },
}

/// What the game loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Stay in the menu.
    Continue,
    /// Start a game. `None` asks for a random seed.
    Start(Option<u64>),
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    screen: MenuScreen,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    pub fn new() -> Self {
        Self {
            screen: MenuScreen::Main,
        }
    }

    pub fn screen(&self) -> &MenuScreen {
        &self.screen
    }

    pub fn handle_key(&mut self, key: MenuKey) -> MenuOutcome {
        if key == MenuKey::Interrupt {
            return MenuOutcome::Exit;
        }

        let mut next = None;
        let outcome = match &mut self.screen {
            MenuScreen::Main => match key {
                MenuKey::Digit(1) => MenuOutcome::Start(None),
                MenuKey::Digit(2) => {
                    next = Some(MenuScreen::SeedEntry {
                        input: String::new(),
                    });
                    MenuOutcome::Continue
                }
                MenuKey::Digit(3) | MenuKey::Escape => MenuOutcome::Exit,
                // Any other choice starts a new game.
                MenuKey::Digit(_) => MenuOutcome::Start(None),
                _ => MenuOutcome::Continue,
            },
            MenuScreen::SeedEntry { input } => match key {
                MenuKey::Digit(d) => {
                    if let Some(c) = char::from_digit(u32::from(d), 10) {
                        if input.len() < MAX_SEED_DIGITS {
                            input.push(c);
                        }
                    }
                    MenuOutcome::Continue
                }
                MenuKey::Backspace => {
                    input.pop();
                    MenuOutcome::Continue
                }
                // Empty or out-of-range input falls back to a random seed.
                MenuKey::Enter => MenuOutcome::Start(input.parse().ok()),
                MenuKey::Escape => {
                    next = Some(MenuScreen::Main);
                    MenuOutcome::Continue
                }
                MenuKey::Interrupt => MenuOutcome::Exit,
            },
        };

        if let Some(screen) = next {
            self.screen = screen;
        }
        outcome
    }

    /// Draw the menu centered in `viewport`.
    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::shade(Shade::Black),
        });

        let mut lines: Vec<(String, CellStyle)> = vec![
            (TITLE.to_string(), CellStyle::shade(Shade::Yellow).bold()),
            (String::new(), CellStyle::default()),
        ];
        match &self.screen {
            MenuScreen::Main => {
                for option in OPTIONS {
                    lines.push((option.to_string(), CellStyle::default()));
                }
                lines.push((String::new(), CellStyle::default()));
                lines.push((
                    "Choose an option: ".to_string(),
                    CellStyle::shade(Shade::Cyan),
                ));
            }
            MenuScreen::SeedEntry { input } => {
                lines.push((format!("Enter seed: {input}_"), CellStyle::shade(Shade::Cyan)));
                lines.push((String::new(), CellStyle::default()));
                lines.push((
                    "Enter=Start  Backspace=Delete  Esc=Back".to_string(),
                    CellStyle::shade(Shade::DarkGray),
                ));
            }
        }

        let top = viewport.height.saturating_sub(lines.len() as u16) / 2;
        let left = viewport.width.saturating_sub(TITLE.len() as u16) / 2;
        for (i, (text, style)) in lines.iter().enumerate() {
            fb.put_str(left, top.saturating_add(i as u16), text, *style);
        }
    }
}
