//! Grid module - the dungeon's terrain
//!
//! The grid is a 50x30 dense array of [`CellKind`] in row-major order.
//! Coordinates: (x, y) where x ranges 0..49 (left to right), y ranges 0..29 (top to bottom).
//!
//! Every read outside the grid returns [`CellKind::Wall`], so the dungeon is
//! always enclosed no matter where a caller looks.

use crate::types::{CellKind, MAP_HEIGHT, MAP_WIDTH};

/// Read access to terrain by integer cell coordinate.
///
/// The raycaster is generic over this so it can be pointed at something other
/// than a [`Grid`] (an open field, a hand-built corridor).
pub trait CellSource {
    fn cell(&self, x: i32, y: i32) -> CellKind;

    /// Look up the cell containing a continuous point.
    ///
    /// Coordinates are truncated toward zero. Positions are never negative
    /// on the map, so truncation and flooring agree there.
    fn cell_at_point(&self, fx: f64, fy: f64) -> CellKind {
        self.cell(fx as i32, fy as i32)
    }
}

/// The dungeon terrain, owned by the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: i32,
    height: i32,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellKind>,
}

impl Grid {
    /// Create a full-size grid where every cell is a wall.
    pub fn new() -> Self {
        Self::filled(MAP_WIDTH, MAP_HEIGHT, CellKind::Wall)
    }

    /// Create a grid of arbitrary size filled with one kind.
    pub fn filled(width: i32, height: i32, kind: CellKind) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![kind; (width as usize) * (height as usize)],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Cell at (x, y), or `Wall` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> CellKind {
        self.index(x, y).map_or(CellKind::Wall, |idx| self.cells[idx])
    }

    /// Set cell at (x, y).
    /// Returns false (and changes nothing) if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, kind: CellKind) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = kind;
                true
            }
            None => false,
        }
    }

    /// Number of cells holding `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Iterate one row, left to right. Empty for rows outside the grid.
    pub fn row(&self, y: i32) -> &[CellKind] {
        if y < 0 || y >= self.height {
            return &[];
        }
        let start = (y as usize) * (self.width as usize);
        &self.cells[start..start + self.width as usize]
    }

    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl CellSource for Grid {
    fn cell(&self, x: i32, y: i32) -> CellKind {
        self.get(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_wall() {
        let grid = Grid::new();
        assert_eq!(grid.width(), MAP_WIDTH);
        assert_eq!(grid.height(), MAP_HEIGHT);
        assert_eq!(grid.count(CellKind::Wall), (MAP_WIDTH * MAP_HEIGHT) as usize);
    }

    #[test]
    fn out_of_bounds_reads_are_walls() {
        let grid = Grid::filled(4, 3, CellKind::Empty);
        assert_eq!(grid.get(-1, 0), CellKind::Wall);
        assert_eq!(grid.get(0, -1), CellKind::Wall);
        assert_eq!(grid.get(4, 0), CellKind::Wall);
        assert_eq!(grid.get(0, 3), CellKind::Wall);
        assert_eq!(grid.get(3, 2), CellKind::Empty);
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut grid = Grid::filled(4, 3, CellKind::Empty);
        assert!(!grid.set(-1, 0, CellKind::Key));
        assert!(!grid.set(4, 0, CellKind::Key));
        assert_eq!(grid.count(CellKind::Key), 0);

        assert!(grid.set(2, 1, CellKind::Key));
        assert_eq!(grid.get(2, 1), CellKind::Key);
    }

    #[test]
    fn point_lookup_truncates_toward_zero() {
        let mut grid = Grid::filled(10, 10, CellKind::Empty);
        grid.set(6, 5, CellKind::Wall);

        assert_eq!(grid.cell_at_point(6.0, 5.0), CellKind::Wall);
        assert_eq!(grid.cell_at_point(6.99, 5.99), CellKind::Wall);
        assert_eq!(grid.cell_at_point(5.999, 5.5), CellKind::Empty);
        assert_eq!(grid.cell_at_point(7.0, 5.5), CellKind::Empty);
    }

    #[test]
    fn rows_are_sliced_in_order() {
        let mut grid = Grid::filled(3, 2, CellKind::Empty);
        grid.set(1, 1, CellKind::DoorClosed);
        assert_eq!(
            grid.row(1),
            &[CellKind::Empty, CellKind::DoorClosed, CellKind::Empty]
        );
        assert!(grid.row(2).is_empty());
    }
}
