//! Overhead minimap: a fixed window of the grid around the actor.

use ascii_dungeon_core::{Actor, Grid};

use crate::image::GlyphImage;
use crate::palette::Shade;
use crate::types::{CellKind, MINIMAP_HEIGHT, MINIMAP_WIDTH};

const ACTOR_GLYPH: char = 'P';

/// Glyph and shade for one grid cell on the minimap.
pub fn minimap_cell(kind: CellKind) -> (char, Shade) {
    match kind {
        CellKind::Empty => ('.', Shade::DarkGray),
        CellKind::Wall => ('#', Shade::Gray),
        CellKind::DoorClosed => ('+', Shade::DarkYellow),
        CellKind::DoorOpen => ('/', Shade::Yellow),
        CellKind::Key => ('K', Shade::Cyan),
    }
}

/// Top-left grid cell of a `size`-wide window centered on `center`,
/// clamped so the window stays inside `[0, limit)`.
fn window_origin(center: i32, size: i32, limit: i32) -> i32 {
    let start = center - size / 2;
    start.min(limit - size).max(0)
}

/// Draw the window of `grid` around `actor` into `out`.
///
/// The window is 20x10, shrunk to the grid when the grid is smaller. The
/// actor's cell is always drawn as `P`.
pub fn render_minimap(grid: &Grid, actor: &Actor, out: &mut GlyphImage) {
    let w = (MINIMAP_WIDTH as i32).min(grid.width()).max(0);
    let h = (MINIMAP_HEIGHT as i32).min(grid.height()).max(0);
    out.resize(w as u16, h as u16);

    let (ax, ay) = actor.cell();
    let start_x = window_origin(ax, w, grid.width());
    let start_y = window_origin(ay, h, grid.height());

    for y in 0..h {
        for x in 0..w {
            let (map_x, map_y) = (start_x + x, start_y + y);
            let (ch, shade) = if (map_x, map_y) == (ax, ay) {
                (ACTOR_GLYPH, Shade::Red)
            } else {
                minimap_cell(grid.get(map_x, map_y))
            };
            out.set(x as u16, y as u16, ch, shade);
        }
    }
}
