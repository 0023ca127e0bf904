//! Debug text export of a grid, one line per row.

use crate::grid::Grid;

/// Render every row as a string of export characters
/// (`.` empty, `#` wall, `+` closed door, `/` open door, `K` key).
pub fn export_to_text(grid: &Grid) -> Vec<String> {
    (0..grid.height())
        .map(|y| grid.row(y).iter().map(|kind| kind.export_char()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellKind;

    #[test]
    fn export_maps_every_kind() {
        let mut grid = Grid::filled(5, 2, CellKind::Wall);
        grid.set(0, 0, CellKind::Empty);
        grid.set(1, 0, CellKind::DoorClosed);
        grid.set(2, 0, CellKind::DoorOpen);
        grid.set(3, 0, CellKind::Key);

        assert_eq!(export_to_text(&grid), vec![".+/K#", "#####"]);
    }

    #[test]
    fn export_has_one_line_per_row() {
        let grid = Grid::new();
        let lines = export_to_text(&grid);
        assert_eq!(lines.len(), grid.height() as usize);
        assert!(lines.iter().all(|l| l.len() == grid.width() as usize));
    }
}
