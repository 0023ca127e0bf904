//! Session module - one playthrough of one seed
//!
//! Owns the grid and the actor and turns [`PlayerAction`]s into actor calls.
//! The renderer only ever sees `&Grid` / `&Actor` borrows from here.

use tracing::{debug, info};

use crate::actor::Actor;
use crate::generator::generate;
use crate::grid::Grid;
use crate::types::{ActorEvent, PlayerAction};

/// Generate the dungeon for `seed` and place an actor at its start.
pub fn new_session(seed: u64) -> (Grid, Actor) {
    let dungeon = generate(seed);
    let actor = Actor::new(dungeon.start_x, dungeon.start_y);
    (dungeon.grid, actor)
}

/// Complete game state for one seed.
#[derive(Debug, Clone)]
pub struct Session {
    seed: u64,
    grid: Grid,
    actor: Actor,
    last_event: Option<ActorEvent>,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        let (grid, actor) = new_session(seed);
        info!(seed, "session started");
        Self::from_parts(seed, grid, actor)
    }

    /// Build a session around an existing grid and actor.
    pub fn from_parts(seed: u64, grid: Grid, actor: Actor) -> Self {
        Self {
            seed,
            grid,
            actor,
            last_event: None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Most recent event, kept until another one replaces it.
    pub fn last_event(&self) -> Option<ActorEvent> {
        self.last_event
    }

    pub fn last_message(&self) -> Option<&'static str> {
        self.last_event.map(|e| e.message())
    }

    /// Apply one command.
    ///
    /// Strafes are skipped when the actor stands in a 1-wide corridor.
    /// `Quit` is left to the game loop and does nothing here.
    pub fn apply_action(&mut self, action: PlayerAction) -> Option<ActorEvent> {
        let grid = &mut self.grid;
        let event = match action {
            PlayerAction::Forward => self.actor.move_forward(grid),
            PlayerAction::Backward => self.actor.move_backward(grid),
            PlayerAction::RotateLeft => {
                self.actor.rotate_left();
                None
            }
            PlayerAction::RotateRight => {
                self.actor.rotate_right();
                None
            }
            PlayerAction::StrafeLeft => {
                if self.actor.is_space_restricted(grid) {
                    None
                } else {
                    self.actor.strafe_left(grid)
                }
            }
            PlayerAction::StrafeRight => {
                if self.actor.is_space_restricted(grid) {
                    None
                } else {
                    self.actor.strafe_right(grid)
                }
            }
            PlayerAction::Interact => self.actor.interact(grid),
            PlayerAction::Quit => None,
        };

        if let Some(e) = event {
            debug!(action = action.as_str(), event = ?e, "actor event");
            self.last_event = Some(e);
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CellKind, Direction};

    #[test]
    fn session_starts_on_open_floor() {
        let session = Session::new(42);
        let (cx, cy) = session.actor().cell();
        assert_eq!(session.grid().get(cx, cy), CellKind::Empty);
        assert_eq!(session.actor().facing(), Direction::North);
        assert_eq!(session.last_message(), None);
    }

    #[test]
    fn new_session_matches_generator_start() {
        let dungeon = generate(7);
        let (grid, actor) = new_session(7);
        assert_eq!(grid, dungeon.grid);
        assert_eq!(actor.cell(), (dungeon.start_x, dungeon.start_y));
    }

    #[test]
    fn strafe_is_vetoed_in_corridor() {
        let mut grid = Grid::filled(10, 10, CellKind::Wall);
        for x in 1..9 {
            grid.set(x, 5, CellKind::Empty);
        }
        let mut session = Session::from_parts(0, grid, Actor::at(4.5, 5.5, 0.0));
        session.apply_action(PlayerAction::StrafeLeft);
        assert_eq!(session.actor().cell(), (4, 5));
        session.apply_action(PlayerAction::StrafeRight);
        assert_eq!(session.actor().cell(), (4, 5));
    }

    #[test]
    fn strafe_goes_through_when_space_allows() {
        let grid = Grid::filled(10, 10, CellKind::Empty);
        let mut session = Session::from_parts(0, grid, Actor::at(4.5, 5.5, 0.0));
        session.apply_action(PlayerAction::StrafeLeft);
        assert_eq!(session.actor().cell(), (4, 4));
    }

    #[test]
    fn events_are_remembered_for_the_hud() {
        let mut grid = Grid::filled(10, 10, CellKind::Empty);
        grid.set(6, 5, CellKind::DoorClosed);
        let mut session = Session::from_parts(0, grid, Actor::at(5.5, 5.5, 0.0));

        assert_eq!(session.apply_action(PlayerAction::Interact), Some(ActorEvent::NeedKey));
        assert_eq!(session.last_message(), Some("The door is locked. You need a key."));

        // Actions that raise no event keep the previous message.
        session.apply_action(PlayerAction::RotateRight);
        assert_eq!(session.last_event(), Some(ActorEvent::NeedKey));
    }

    #[test]
    fn quit_is_a_no_op_for_the_core() {
        let mut session = Session::new(3);
        let before = (*session.actor(), session.grid().clone());
        assert_eq!(session.apply_action(PlayerAction::Quit), None);
        assert_eq!((*session.actor(), session.grid().clone()), before);
    }
}
