use std::f64::consts::PI;

use ascii_dungeon::core::{Actor, Grid, Session};
use ascii_dungeon::types::{ActorEvent, CellKind, Direction, PlayerAction};

/// Walled 10x10 room with an empty interior.
fn room() -> Grid {
    let mut grid = Grid::filled(10, 10, CellKind::Wall);
    for y in 1..9 {
        for x in 1..9 {
            grid.set(x, y, CellKind::Empty);
        }
    }
    grid
}

#[test]
fn walking_into_a_wall_changes_nothing() {
    let mut grid = room();
    grid.set(6, 5, CellKind::Wall);
    let mut actor = Actor::at(5.5, 5.5, 0.0);

    assert_eq!(actor.move_forward(&mut grid), None);
    assert_eq!((actor.x(), actor.y()), (5.5, 5.5));
}

#[test]
fn key_is_picked_up_once() {
    let mut grid = room();
    grid.set(6, 5, CellKind::Key);
    let mut actor = Actor::at(5.5, 5.5, 0.0);

    assert_eq!(actor.move_forward(&mut grid), Some(ActorEvent::KeyPickedUp));
    assert_eq!(actor.keys(), 1);
    assert_eq!(grid.get(6, 5), CellKind::Empty);

    actor.move_backward(&mut grid);
    assert_eq!(actor.move_forward(&mut grid), None);
    assert_eq!(actor.keys(), 1);
}

#[test]
fn locked_door_then_unlock_then_walk_through() {
    let mut grid = room();
    grid.set(6, 5, CellKind::DoorClosed);
    let mut actor = Actor::at(5.5, 5.5, 0.0);

    assert_eq!(actor.move_forward(&mut grid), Some(ActorEvent::DoorLocked));
    assert_eq!(actor.interact(&mut grid), Some(ActorEvent::NeedKey));
    assert_eq!(grid.get(6, 5), CellKind::DoorClosed);

    let mut actor = actor.with_keys(1);
    assert_eq!(actor.interact(&mut grid), Some(ActorEvent::DoorUnlocked));
    assert_eq!(actor.keys(), 0);
    assert_eq!(grid.get(6, 5), CellKind::DoorOpen);

    assert_eq!(actor.move_forward(&mut grid), None);
    assert_eq!(actor.cell(), (6, 5));
}

#[test]
fn four_right_turns_visit_every_direction() {
    let mut actor = Actor::at(4.5, 4.5, 3.0 * PI / 2.0);
    let mut seen = vec![actor.facing()];
    for _ in 0..4 {
        actor.rotate_right();
        seen.push(actor.facing());
    }
    assert_eq!(
        seen,
        vec![
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
            Direction::North
        ]
    );
}

#[test]
fn strafe_is_vetoed_in_a_corridor() {
    // North-south corridor, one cell wide.
    let mut grid = Grid::filled(5, 8, CellKind::Wall);
    for y in 1..7 {
        grid.set(2, y, CellKind::Empty);
    }
    let mut session = Session::from_parts(0, grid, Actor::new(2, 4));

    assert_eq!(session.apply_action(PlayerAction::StrafeLeft), None);
    assert_eq!(session.apply_action(PlayerAction::StrafeRight), None);
    assert_eq!(session.actor().cell(), (2, 4));

    session.apply_action(PlayerAction::Forward);
    assert_eq!(session.actor().cell(), (2, 3));
}

#[test]
fn strafing_in_open_space_moves_sideways() {
    let mut session = Session::from_parts(0, room(), Actor::new(4, 4));
    // Facing North, left is West.
    session.apply_action(PlayerAction::StrafeLeft);
    assert_eq!(session.actor().cell(), (3, 4));
    session.apply_action(PlayerAction::StrafeRight);
    session.apply_action(PlayerAction::StrafeRight);
    assert_eq!(session.actor().cell(), (5, 4));
}
