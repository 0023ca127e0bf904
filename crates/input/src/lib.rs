//! Terminal input: maps `crossterm` key events into
//! [`crate::types::PlayerAction`]s for play and [`MenuKey`]s for the start menu.
//!
//! Independent of any rendering; the game loop polls events and hands them in.

pub mod map;
pub mod menu;

pub use ascii_dungeon_types as types;

pub use map::{handle_key_event, should_quit};
pub use menu::{menu_key, MenuKey};
