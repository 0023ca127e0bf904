//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be used
//! from the generator, the actor rules, the renderer and the input layer alike.
//!
//! # Map Dimensions
//!
//! - **Width**: 50 columns (indexed 0-49)
//! - **Height**: 30 rows (indexed 0-29)
//! - Everything outside the map reads as [`CellKind::Wall`]
//!
//! # Render Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FIELD_OF_VIEW` | π/3 | Horizontal field of view (60°) |
//! | `MAX_DEPTH` | 20.0 | Farthest distance a ray travels |
//! | `RAY_STEP` | 0.01 | Ray marching increment |
//! | `MIN_CORRECTED_DISTANCE` | 0.1 | Floor applied after fish-eye correction |
//! | `COLOR_REUSE_THRESHOLD` | 0.05 | Adjacent columns closer than this share a color |
//! | `MINIMAP_WIDTH` × `MINIMAP_HEIGHT` | 20 × 10 | Overhead map window |
//! | `HUD_ROWS` | 6 | Rows reserved below the 3D view |
//!
//! # Examples
//!
//! ```
//! use ascii_dungeon_types::{CellKind, Direction, PlayerAction, MAP_HEIGHT, MAP_WIDTH};
//!
//! assert!(CellKind::Wall.blocks_movement());
//! assert!(!CellKind::DoorOpen.blocks_movement());
//! assert_eq!(CellKind::Key.export_char(), 'K');
//!
//! assert_eq!(Direction::North.as_str(), "North");
//! assert_eq!(PlayerAction::from_str("strafeLeft"), Some(PlayerAction::StrafeLeft));
//!
//! assert_eq!(MAP_WIDTH, 50);
//! assert_eq!(MAP_HEIGHT, 30);
//! ```

use std::f64::consts::PI;

/// Map width in cells (50 columns)
pub const MAP_WIDTH: i32 = 50;

/// Map height in cells (30 rows)
pub const MAP_HEIGHT: i32 = 30;

/// Room count is drawn from `[ROOM_COUNT_MIN, ROOM_COUNT_MAX)`.
pub const ROOM_COUNT_MIN: i32 = 5;
pub const ROOM_COUNT_MAX: i32 = 10;

/// Room width is drawn from `[ROOM_WIDTH_MIN, ROOM_WIDTH_MAX)`.
pub const ROOM_WIDTH_MIN: i32 = 4;
pub const ROOM_WIDTH_MAX: i32 = 10;

/// Room height is drawn from `[ROOM_HEIGHT_MIN, ROOM_HEIGHT_MAX)`.
pub const ROOM_HEIGHT_MIN: i32 = 4;
pub const ROOM_HEIGHT_MAX: i32 = 8;

/// Chance (percent) that a walled perimeter cell becomes a closed door.
pub const DOOR_CHANCE_PERCENT: u32 = 20;

/// Distance covered by a single move or strafe, in cells.
pub const MOVE_STEP: f64 = 1.0;

/// Angle covered by a single rotation.
pub const ROTATION_STEP: f64 = PI / 2.0;

/// Horizontal field of view (60°).
pub const FIELD_OF_VIEW: f64 = PI / 3.0;

/// Farthest distance a ray is marched before it counts as a far wall.
pub const MAX_DEPTH: f64 = 20.0;

/// Ray marching increment.
pub const RAY_STEP: f64 = 0.01;

/// Lower bound for the fish-eye corrected distance.
pub const MIN_CORRECTED_DISTANCE: f64 = 0.1;

/// Adjacent columns whose corrected distances differ by less than this reuse a color.
pub const COLOR_REUSE_THRESHOLD: f64 = 0.05;

/// Rows of the runner-wall band drawn below each wall slice.
pub const RUNNER_WALL_ROWS: i32 = 2;

/// Minimap window width in cells.
pub const MINIMAP_WIDTH: u16 = 20;

/// Minimap window height in cells.
pub const MINIMAP_HEIGHT: u16 = 10;

/// Terminal rows reserved below the 3D view for HUD and messages.
pub const HUD_ROWS: u16 = 6;

/// Fixed delay between frames (milliseconds).
pub const FRAME_MS: u64 = 50;

/// Control legend shown under the HUD.
pub const CONTROLS_LEGEND: &str = "Controls: W=Forward, S=Backward, A=Rotate Left, D=Rotate Right, Q=Strafe Left, E=Strafe Right, Space=Interact, Esc=Exit";

/// Normalize an angle into `[0, 2π)`.
///
/// # Examples
///
/// ```
/// use ascii_dungeon_types::normalize_angle;
/// use std::f64::consts::PI;
///
/// assert!((normalize_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
/// assert!((normalize_angle(2.0 * PI)).abs() < 1e-12);
/// ```
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(2.0 * PI);
    // rem_euclid can round up to exactly 2π for tiny negative inputs.
    if a >= 2.0 * PI {
        0.0
    } else {
        a
    }
}

/// The terrain kind of one grid square.
///
/// Legal transitions after generation are `DoorClosed -> DoorOpen` (unlocking)
/// and `Key -> Empty` (pickup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    Empty,
    #[default]
    Wall,
    DoorClosed,
    DoorOpen,
    Key,
}

impl CellKind {
    /// Every cell kind, in declaration order.
    pub const ALL: [CellKind; 5] = [
        CellKind::Empty,
        CellKind::Wall,
        CellKind::DoorClosed,
        CellKind::DoorOpen,
        CellKind::Key,
    ];

    /// Whether an actor stepping into this cell is turned back.
    pub fn blocks_movement(&self) -> bool {
        match self {
            CellKind::Empty | CellKind::DoorOpen | CellKind::Key => false,
            CellKind::Wall | CellKind::DoorClosed => true,
        }
    }

    /// Whether a ray stops when it enters this cell.
    ///
    /// Doors (open or not) and keys are drawn as solid obstacles.
    pub fn stops_ray(&self) -> bool {
        match self {
            CellKind::Empty => false,
            CellKind::Wall | CellKind::DoorClosed | CellKind::DoorOpen | CellKind::Key => true,
        }
    }

    /// Character used by the debug text export.
    pub fn export_char(&self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Wall => '#',
            CellKind::DoorClosed => '+',
            CellKind::DoorOpen => '/',
            CellKind::Key => 'K',
        }
    }
}

/// Cardinal facing derived from the actor's continuous angle.
///
/// The map's y axis grows downward, so North is angle `3π/2` and South `π/2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    /// Bucket a normalized angle onto the nearest cardinal.
    ///
    /// Each bucket spans `π/2` centered on its cardinal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ascii_dungeon_types::Direction;
    /// use std::f64::consts::PI;
    ///
    /// assert_eq!(Direction::from_angle(0.0), Direction::East);
    /// assert_eq!(Direction::from_angle(PI / 2.0), Direction::South);
    /// assert_eq!(Direction::from_angle(PI), Direction::West);
    /// assert_eq!(Direction::from_angle(3.0 * PI / 2.0), Direction::North);
    /// assert_eq!(Direction::from_angle(-0.1), Direction::East);
    /// ```
    pub fn from_angle(angle: f64) -> Self {
        let a = normalize_angle(angle);
        let quarter = PI / 4.0;
        if a < quarter || a >= 7.0 * quarter {
            Direction::East
        } else if a < 3.0 * quarter {
            Direction::South
        } else if a < 5.0 * quarter {
            Direction::West
        } else {
            Direction::North
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
            Direction::North => "North",
        }
    }
}

/// Commands the input layer hands to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Step one cell along the facing vector
    Forward,
    /// Step one cell against the facing vector
    Backward,
    /// Turn 90° counter-clockwise on screen
    RotateLeft,
    /// Turn 90° clockwise on screen
    RotateRight,
    /// Sidestep one cell to the left (vetoed in 1-wide corridors)
    StrafeLeft,
    /// Sidestep one cell to the right (vetoed in 1-wide corridors)
    StrafeRight,
    /// Use a key on the door straight ahead
    Interact,
    /// Leave the game
    Quit,
}

impl PlayerAction {
    /// Parse an action name (case-insensitive camelCase).
    ///
    /// # Examples
    ///
    /// ```
    /// use ascii_dungeon_types::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::from_str("forward"), Some(PlayerAction::Forward));
    /// assert_eq!(PlayerAction::from_str("rotateRight"), Some(PlayerAction::RotateRight));
    /// assert_eq!(PlayerAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "forward" => Some(PlayerAction::Forward),
            "backward" => Some(PlayerAction::Backward),
            "rotateleft" => Some(PlayerAction::RotateLeft),
            "rotateright" => Some(PlayerAction::RotateRight),
            "strafeleft" => Some(PlayerAction::StrafeLeft),
            "straferight" => Some(PlayerAction::StrafeRight),
            "interact" => Some(PlayerAction::Interact),
            "quit" => Some(PlayerAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::Forward => "forward",
            PlayerAction::Backward => "backward",
            PlayerAction::RotateLeft => "rotateLeft",
            PlayerAction::RotateRight => "rotateRight",
            PlayerAction::StrafeLeft => "strafeLeft",
            PlayerAction::StrafeRight => "strafeRight",
            PlayerAction::Interact => "interact",
            PlayerAction::Quit => "quit",
        }
    }
}

/// Something noteworthy that happened while applying an action.
///
/// Events are reported instead of errors; the grid and actor are left
/// unchanged for the locked variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorEvent {
    /// Stepped onto a key; key count went up by one.
    KeyPickedUp,
    /// Walked into a closed door.
    DoorLocked,
    /// Used a key on the door ahead.
    DoorUnlocked,
    /// Tried a closed door with no key in hand.
    NeedKey,
}

impl ActorEvent {
    /// Message shown on the HUD.
    pub fn message(&self) -> &'static str {
        match self {
            ActorEvent::KeyPickedUp => "You picked up a key!",
            ActorEvent::DoorLocked => "The door is locked. Press Space to use a key.",
            ActorEvent::DoorUnlocked => "You unlocked the door.",
            ActorEvent::NeedKey => "The door is locked. You need a key.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_constants_defaults() {
        assert_eq!(MAX_DEPTH, 20.0);
        assert_eq!(RAY_STEP, 0.01);
        assert_eq!(MIN_CORRECTED_DISTANCE, 0.1);
        assert_eq!(MINIMAP_WIDTH, 20);
        assert_eq!(MINIMAP_HEIGHT, 10);
        assert!((FIELD_OF_VIEW - PI / 3.0).abs() < 1e-12);
    }

    #[test]
    fn every_kind_has_a_distinct_export_char() {
        let chars: Vec<char> = CellKind::ALL.iter().map(|k| k.export_char()).collect();
        for (i, c) in chars.iter().enumerate() {
            assert!(!chars[i + 1..].contains(c), "duplicate export char {c:?}");
        }
    }

    #[test]
    fn every_kind_has_movement_and_ray_rules() {
        // Adding a variant must extend ALL; this match fails to compile otherwise.
        fn ordinal(kind: CellKind) -> usize {
            match kind {
                CellKind::Empty => 0,
                CellKind::Wall => 1,
                CellKind::DoorClosed => 2,
                CellKind::DoorOpen => 3,
                CellKind::Key => 4,
            }
        }
        for (i, kind) in CellKind::ALL.iter().enumerate() {
            assert_eq!(ordinal(*kind), i);
        }

        let stoppers: Vec<_> = CellKind::ALL.iter().filter(|k| k.stops_ray()).collect();
        assert_eq!(stoppers.len(), 4);
        let blockers: Vec<_> = CellKind::ALL
            .iter()
            .filter(|k| k.blocks_movement())
            .collect();
        assert_eq!(blockers, vec![&CellKind::Wall, &CellKind::DoorClosed]);
    }

    #[test]
    fn direction_buckets_are_centered_on_cardinals() {
        let eps = 1e-9;
        assert_eq!(Direction::from_angle(PI / 4.0 - eps), Direction::East);
        assert_eq!(Direction::from_angle(PI / 4.0), Direction::South);
        assert_eq!(Direction::from_angle(3.0 * PI / 4.0), Direction::West);
        assert_eq!(Direction::from_angle(5.0 * PI / 4.0), Direction::North);
        assert_eq!(Direction::from_angle(7.0 * PI / 4.0), Direction::East);
    }

    #[test]
    fn normalize_angle_wraps_into_range() {
        for a in [-10.0, -PI, -0.0, 0.0, 1.0, 2.0 * PI, 7.5, 100.0] {
            let n = normalize_angle(a);
            assert!((0.0..2.0 * PI).contains(&n), "{} -> {}", a, n);
        }
    }

    #[test]
    fn action_names_round_trip() {
        for action in [
            PlayerAction::Forward,
            PlayerAction::Backward,
            PlayerAction::RotateLeft,
            PlayerAction::RotateRight,
            PlayerAction::StrafeLeft,
            PlayerAction::StrafeRight,
            PlayerAction::Interact,
            PlayerAction::Quit,
        ] {
            assert_eq!(PlayerAction::from_str(action.as_str()), Some(action));
        }
    }
}
