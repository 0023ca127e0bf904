use proptest::prelude::*;

use ascii_dungeon::core::{export_to_text, generate, generate_with_stats, Grid};
use ascii_dungeon::types::{CellKind, MAP_HEIGHT, MAP_WIDTH};

fn outer_ring_is_wall(grid: &Grid) -> bool {
    let wall = |x, y| grid.get(x, y) == CellKind::Wall;
    (0..MAP_WIDTH).all(|x| wall(x, 0) && wall(x, MAP_HEIGHT - 1))
        && (0..MAP_HEIGHT).all(|y| wall(0, y) && wall(MAP_WIDTH - 1, y))
}

#[test]
fn seed_42_is_reproducible() {
    let a = generate(42);
    let b = generate(42);
    assert_eq!(a, b);
    assert_eq!(export_to_text(&a.grid), export_to_text(&b.grid));
}

#[test]
fn different_seeds_give_different_maps() {
    let maps: Vec<Vec<String>> = (0..8).map(|s| export_to_text(&generate(s).grid)).collect();
    let distinct = maps
        .iter()
        .enumerate()
        .filter(|(i, m)| !maps[..*i].contains(m))
        .count();
    assert!(distinct > 1);
}

#[test]
fn grid_has_fixed_dimensions() {
    let dungeon = generate(7);
    assert_eq!(dungeon.grid.width(), 50);
    assert_eq!(dungeon.grid.height(), 30);
    let rows = export_to_text(&dungeon.grid);
    assert_eq!(rows.len(), 30);
    assert!(rows.iter().all(|r| r.chars().count() == 50));
}

#[test]
fn stats_agree_with_the_grid() {
    let (dungeon, stats) = generate_with_stats(1234);
    assert!((5..10).contains(&stats.attempts));
    assert_eq!(stats.rooms as usize, dungeon.rooms.len());
    assert_eq!(stats.keys, stats.rooms);
    assert_eq!(dungeon.grid.count(CellKind::Key), dungeon.rooms.len());
    assert_eq!(dungeon.grid.count(CellKind::DoorClosed), stats.doors as usize);
    assert_eq!(dungeon.grid.count(CellKind::DoorOpen), 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generation_is_deterministic(seed in any::<u64>()) {
        prop_assert_eq!(generate(seed), generate(seed));
    }

    #[test]
    fn boundary_is_sealed(seed in any::<u64>()) {
        let dungeon = generate(seed);
        prop_assert!(outer_ring_is_wall(&dungeon.grid));
    }

    #[test]
    fn rooms_fit_and_never_overlap(seed in any::<u64>()) {
        let dungeon = generate(seed);
        prop_assert!(!dungeon.rooms.is_empty());
        prop_assert!(dungeon.rooms.len() <= 9);
        for (i, room) in dungeon.rooms.iter().enumerate() {
            prop_assert!((4..=9).contains(&room.width()));
            prop_assert!((4..=7).contains(&room.height()));
            prop_assert!(room.x1 >= 1 && room.y1 >= 1);
            prop_assert!(room.x2 < MAP_WIDTH - 1 && room.y2 < MAP_HEIGHT - 1);
            for other in &dungeon.rooms[..i] {
                prop_assert!(!room.intersects(other));
            }
        }
    }

    #[test]
    fn each_room_holds_one_key(seed in any::<u64>()) {
        let dungeon = generate(seed);
        for room in &dungeon.rooms {
            let keys = (room.y1..=room.y2)
                .flat_map(|y| (room.x1..=room.x2).map(move |x| (x, y)))
                .filter(|&(x, y)| dungeon.grid.get(x, y) == CellKind::Key)
                .filter(|&(x, y)| room.interior_contains(x, y))
                .count();
            prop_assert_eq!(keys, 1);
        }
        prop_assert_eq!(dungeon.grid.count(CellKind::Key), dungeon.rooms.len());
    }

    #[test]
    fn start_is_open_floor_in_first_room(seed in any::<u64>()) {
        let dungeon = generate(seed);
        let first = dungeon.rooms[0];
        prop_assert_eq!((dungeon.start_x, dungeon.start_y), first.center());
        prop_assert_eq!(dungeon.grid.get(dungeon.start_x, dungeon.start_y), CellKind::Empty);
    }

    #[test]
    fn doors_sit_just_outside_rooms(seed in any::<u64>()) {
        let dungeon = generate(seed);
        for y in 0..MAP_HEIGHT {
            for x in 0..MAP_WIDTH {
                if dungeon.grid.get(x, y) != CellKind::DoorClosed {
                    continue;
                }
                let on_perimeter = dungeon.rooms.iter().any(|r| r.perimeter().any(|p| p == (x, y)));
                prop_assert!(on_perimeter, "door at ({}, {}) is not on a room perimeter", x, y);
            }
        }
    }
}
