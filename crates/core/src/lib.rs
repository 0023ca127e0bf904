//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the dungeon, the player and the rules that connect them.
//! It has **zero dependencies** on terminals or input devices, making it:
//!
//! - **Deterministic**: Same seed produces the identical dungeon
//! - **Testable**: Every rule is exercised without a terminal
//! - **Total**: Nothing here returns an error; out-of-range lookups read as walls
//!
//! # Module Structure
//!
//! - [`grid`]: 50x30 terrain array and the [`CellSource`] lookup trait
//! - [`room`]: Inclusive room rectangles used during generation
//! - [`rng`]: Seeded ChaCha RNG wrapper
//! - [`generator`]: Rooms, tunnels, doors and keys from a seed
//! - [`actor`]: Player movement, pickups and door interaction
//! - [`session`]: One playthrough: grid + actor + command dispatch
//! - [`export`]: Debug text dump of a grid
//!
//! # Example
//!
//! ```
//! use ascii_dungeon_core::Session;
//! use ascii_dungeon_types::{CellKind, PlayerAction};
//!
//! let mut session = Session::new(42);
//! let (x, y) = session.actor().cell();
//! assert_eq!(session.grid().get(x, y), CellKind::Empty);
//!
//! session.apply_action(PlayerAction::RotateRight);
//! session.apply_action(PlayerAction::Forward);
//! ```

pub mod actor;
pub mod export;
pub mod generator;
pub mod grid;
pub mod rng;
pub mod room;
pub mod session;

pub use ascii_dungeon_types as types;

// Re-export commonly used types for convenience
pub use actor::Actor;
pub use export::export_to_text;
pub use generator::{generate, generate_with_stats, Dungeon, GenerationStats};
pub use grid::{CellSource, Grid};
pub use rng::DungeonRng;
pub use room::Room;
pub use session::{new_session, Session};
