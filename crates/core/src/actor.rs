//! Actor module - the player's position, facing and movement rules
//!
//! Position is continuous (sub-cell) and facing is an angle in radians kept in
//! `[0, 2π)`. Every move covers exactly one cell length along a unit vector:
//!
//! | Move | Vector |
//! |------|--------|
//! | forward | `(cos θ, sin θ)` |
//! | backward | `(-cos θ, -sin θ)` |
//! | strafe left | `(sin θ, -cos θ)` |
//! | strafe right | `(-sin θ, cos θ)` |
//!
//! Cell lookups truncate the continuous coordinate toward zero (`as i32`).
//! Positions never go negative on the map, so this matches flooring; the
//! truncation decides which cell the actor stands in at cell boundaries.

use std::f64::consts::PI;

use tracing::debug;

use crate::grid::Grid;
use crate::types::{normalize_angle, ActorEvent, CellKind, Direction, MOVE_STEP, ROTATION_STEP};

/// The player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    x: f64,
    y: f64,
    angle: f64,
    keys: u32,
}

impl Actor {
    /// Place an actor at the center of cell (cell_x, cell_y), facing North.
    pub fn new(cell_x: i32, cell_y: i32) -> Self {
        Self::at(cell_x as f64 + 0.5, cell_y as f64 + 0.5, 3.0 * PI / 2.0)
    }

    /// Place an actor at an exact point and angle.
    pub fn at(x: f64, y: f64, angle: f64) -> Self {
        Self {
            x,
            y,
            angle: normalize_angle(angle),
            keys: 0,
        }
    }

    pub fn with_keys(mut self, keys: u32) -> Self {
        self.keys = keys;
        self
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn keys(&self) -> u32 {
        self.keys
    }

    /// Integer cell the actor stands in.
    pub fn cell(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }

    pub fn facing(&self) -> Direction {
        Direction::from_angle(self.angle)
    }

    fn forward_vector(&self) -> (f64, f64) {
        (self.angle.cos(), self.angle.sin())
    }

    fn left_vector(&self) -> (f64, f64) {
        (self.angle.sin(), -self.angle.cos())
    }

    pub fn move_forward(&mut self, grid: &mut Grid) -> Option<ActorEvent> {
        let (dx, dy) = self.forward_vector();
        self.attempt_move(self.x + dx * MOVE_STEP, self.y + dy * MOVE_STEP, grid)
    }

    pub fn move_backward(&mut self, grid: &mut Grid) -> Option<ActorEvent> {
        let (dx, dy) = self.forward_vector();
        self.attempt_move(self.x - dx * MOVE_STEP, self.y - dy * MOVE_STEP, grid)
    }

    /// Sidestep left. Does not check [`Actor::is_space_restricted`]; callers
    /// that forbid strafing in 1-wide corridors must check first.
    pub fn strafe_left(&mut self, grid: &mut Grid) -> Option<ActorEvent> {
        let (dx, dy) = self.left_vector();
        self.attempt_move(self.x + dx * MOVE_STEP, self.y + dy * MOVE_STEP, grid)
    }

    /// Sidestep right. See [`Actor::strafe_left`].
    pub fn strafe_right(&mut self, grid: &mut Grid) -> Option<ActorEvent> {
        let (dx, dy) = self.left_vector();
        self.attempt_move(self.x - dx * MOVE_STEP, self.y - dy * MOVE_STEP, grid)
    }

    pub fn rotate_left(&mut self) {
        self.angle = normalize_angle(self.angle - ROTATION_STEP);
    }

    pub fn rotate_right(&mut self) {
        self.angle = normalize_angle(self.angle + ROTATION_STEP);
    }

    /// True when the cells one step to the left and right are both walls.
    pub fn is_space_restricted(&self, grid: &Grid) -> bool {
        let (dx, dy) = self.left_vector();
        let left = grid.get((self.x + dx) as i32, (self.y + dy) as i32);
        let right = grid.get((self.x - dx) as i32, (self.y - dy) as i32);
        left == CellKind::Wall && right == CellKind::Wall
    }

    /// Move to (target_x, target_y) if the destination cell allows it.
    ///
    /// Walls (including everything off the map) reject silently. Closed doors
    /// reject with [`ActorEvent::DoorLocked`]. Keys are picked up on entry.
    pub fn attempt_move(
        &mut self,
        target_x: f64,
        target_y: f64,
        grid: &mut Grid,
    ) -> Option<ActorEvent> {
        let (cx, cy) = (target_x as i32, target_y as i32);
        match grid.get(cx, cy) {
            CellKind::Empty | CellKind::DoorOpen => {
                self.x = target_x;
                self.y = target_y;
                None
            }
            CellKind::Key => {
                grid.set(cx, cy, CellKind::Empty);
                self.keys += 1;
                self.x = target_x;
                self.y = target_y;
                debug!(x = cx, y = cy, keys = self.keys, "key picked up");
                Some(ActorEvent::KeyPickedUp)
            }
            CellKind::DoorClosed => Some(ActorEvent::DoorLocked),
            CellKind::Wall => None,
        }
    }

    /// Use a key on the closed door one step ahead.
    pub fn interact(&mut self, grid: &mut Grid) -> Option<ActorEvent> {
        let (dx, dy) = self.forward_vector();
        let (tx, ty) = ((self.x + dx) as i32, (self.y + dy) as i32);
        match grid.get(tx, ty) {
            CellKind::DoorClosed if self.keys > 0 => {
                self.keys -= 1;
                grid.set(tx, ty, CellKind::DoorOpen);
                debug!(x = tx, y = ty, keys = self.keys, "door unlocked");
                Some(ActorEvent::DoorUnlocked)
            }
            CellKind::DoorClosed => Some(ActorEvent::NeedKey),
            CellKind::Empty | CellKind::Wall | CellKind::DoorOpen | CellKind::Key => None,
        }
    }
}
