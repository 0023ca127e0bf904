//! Dungeon generator - rooms, tunnels, doors and keys from a seed
//!
//! The algorithm runs in fixed phases so a seed always yields the same map:
//!
//! 1. Fill the grid with walls.
//! 2. Try `[5, 10)` random rooms; a room overlapping an accepted one is dropped
//!    (not retried), so fewer rooms than attempts is normal.
//! 3. Join each accepted room to the one accepted before it with an L-shaped
//!    tunnel between centers. Rooms are linked in acceptance order only.
//! 4. Start at the center of the first room.
//! 5. Per room: every walled perimeter cell becomes a closed door with 20%
//!    odds, then one key goes on a random interior cell.
//!
//! Doors are rolled per cell, so a room can end up with no doors or be
//! sealed off entirely. Both are accepted outcomes.

use tracing::debug;

use crate::grid::Grid;
use crate::rng::DungeonRng;
use crate::room::Room;
use crate::types::{
    CellKind, DOOR_CHANCE_PERCENT, MAP_HEIGHT, MAP_WIDTH, ROOM_COUNT_MAX, ROOM_COUNT_MIN,
    ROOM_HEIGHT_MAX, ROOM_HEIGHT_MIN, ROOM_WIDTH_MAX, ROOM_WIDTH_MIN,
};

/// A generated level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dungeon {
    pub grid: Grid,
    pub start_x: i32,
    pub start_y: i32,
    /// Accepted rooms in acceptance order. Diagnostic only.
    pub rooms: Vec<Room>,
}

/// Counters collected while generating, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub attempts: u32,
    pub rooms: u32,
    pub doors: u32,
    pub keys: u32,
}

/// Generate the dungeon for `seed`.
pub fn generate(seed: u64) -> Dungeon {
    generate_with_stats(seed).0
}

/// Generate the dungeon for `seed`, also returning generation counters.
pub fn generate_with_stats(seed: u64) -> (Dungeon, GenerationStats) {
    let mut rng = DungeonRng::new(seed);
    let mut grid = Grid::new();
    let mut stats = GenerationStats::default();

    let rooms = place_rooms(&mut grid, &mut rng, &mut stats);
    connect_rooms(&mut grid, &mut rng, &rooms);

    let (start_x, start_y) = rooms
        .first()
        .map(Room::center)
        .unwrap_or((MAP_WIDTH / 2, MAP_HEIGHT / 2));

    for room in &rooms {
        stats.doors += place_doors(&mut grid, &mut rng, room);
        // The start cell stays clear so the actor never spawns on a key.
        let avoid = room.contains(start_x, start_y).then_some((start_x, start_y));
        place_key(&mut grid, &mut rng, room, avoid);
        stats.keys += 1;
    }

    debug!(
        seed,
        attempts = stats.attempts,
        rooms = stats.rooms,
        doors = stats.doors,
        start_x,
        start_y,
        "dungeon generated"
    );

    (
        Dungeon {
            grid,
            start_x,
            start_y,
            rooms,
        },
        stats,
    )
}

fn place_rooms(grid: &mut Grid, rng: &mut DungeonRng, stats: &mut GenerationStats) -> Vec<Room> {
    let attempts = rng.range(ROOM_COUNT_MIN, ROOM_COUNT_MAX);
    let mut rooms: Vec<Room> = Vec::with_capacity(attempts as usize);

    for _ in 0..attempts {
        stats.attempts += 1;

        let w = rng.range(ROOM_WIDTH_MIN, ROOM_WIDTH_MAX);
        let h = rng.range(ROOM_HEIGHT_MIN, ROOM_HEIGHT_MAX);
        // One wall cell of margin on every side.
        let x = rng.range(1, grid.width() - w - 1);
        let y = rng.range(1, grid.height() - h - 1);

        let room = Room::new(x, y, w, h);
        if rooms.iter().any(|other| room.intersects(other)) {
            continue;
        }

        carve_room(grid, &room);
        rooms.push(room);
        stats.rooms += 1;
    }

    rooms
}

fn carve_room(grid: &mut Grid, room: &Room) {
    for y in room.y1..=room.y2 {
        for x in room.x1..=room.x2 {
            grid.set(x, y, CellKind::Empty);
        }
    }
}

fn connect_rooms(grid: &mut Grid, rng: &mut DungeonRng, rooms: &[Room]) {
    for pair in rooms.windows(2) {
        let (x1, y1) = pair[0].center();
        let (x2, y2) = pair[1].center();

        if rng.coin() {
            carve_horizontal(grid, x1, x2, y1);
            carve_vertical(grid, y1, y2, x2);
        } else {
            carve_vertical(grid, y1, y2, x1);
            carve_horizontal(grid, x1, x2, y2);
        }
    }
}

fn carve_horizontal(grid: &mut Grid, x1: i32, x2: i32, y: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        grid.set(x, y, CellKind::Empty);
    }
}

fn carve_vertical(grid: &mut Grid, y1: i32, y2: i32, x: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        grid.set(x, y, CellKind::Empty);
    }
}

/// Roll a door on every walled perimeter cell. Returns how many were placed.
///
/// The outermost ring of the map is never a candidate, so the boundary stays
/// solid.
fn place_doors(grid: &mut Grid, rng: &mut DungeonRng, room: &Room) -> u32 {
    let mut placed = 0;
    for (x, y) in room.perimeter() {
        if x <= 0 || x >= grid.width() || y <= 0 || y >= grid.height() {
            continue;
        }
        // Only walls roll, so the draw count depends on the map so far.
        if grid.get(x, y) == CellKind::Wall && rng.chance_percent(DOOR_CHANCE_PERCENT) {
            grid.set(x, y, CellKind::DoorClosed);
            placed += 1;
        }
    }
    placed
}

/// Drop one key on a random interior cell, redrawing if it hits `avoid`.
///
/// Interiors have at least 2x2 cells, so a redraw always finds another spot.
fn place_key(grid: &mut Grid, rng: &mut DungeonRng, room: &Room, avoid: Option<(i32, i32)>) {
    loop {
        let key_x = rng.range(room.x1 + 1, room.x2);
        let key_y = rng.range(room.y1 + 1, room.y2);
        if avoid == Some((key_x, key_y)) {
            continue;
        }
        grid.set(key_x, key_y, CellKind::Key);
        return;
    }
}
