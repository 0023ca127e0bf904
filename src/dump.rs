//! Writes the text export of a grid to disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::{export_to_text, Grid};

/// Render `grid` as newline-terminated rows.
pub fn map_text(grid: &Grid) -> String {
    let mut out = String::with_capacity(((grid.width() + 1) * grid.height()).max(0) as usize);
    for row in export_to_text(grid) {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

pub fn write_map(path: &Path, grid: &Grid) -> Result<()> {
    fs::write(path, map_text(grid)).with_context(|| format!("write map dump {}", path.display()))
}
