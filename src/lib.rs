//! ASCII dungeon crawler (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package re-exports
//! them as `ascii_dungeon::{core,input,term,types}` and carries the pieces the
//! binary needs on top: configuration, logging, the start menu and the map dump.

pub use ascii_dungeon_core as core;
pub use ascii_dungeon_input as input;
pub use ascii_dungeon_term as term;
pub use ascii_dungeon_types as types;

pub mod config;
pub mod dump;
pub mod logging;
pub mod menu;
