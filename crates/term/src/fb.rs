//! Framebuffer and style types for terminal rendering.

use crate::image::GlyphImage;
use crate::palette::Shade;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    /// Foreground from a palette shade on a black background.
    pub const fn shade(shade: Shade) -> Self {
        Self {
            fg: shade.rgb(),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::shade(Shade::Gray)
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write a string left to right, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Copy a glyph image with its top-left corner at (x, y). Cells that fall
    /// outside the framebuffer are dropped.
    pub fn blit(&mut self, x: u16, y: u16, image: &GlyphImage) {
        for iy in 0..image.height() {
            for ix in 0..image.width() {
                if let Some((ch, shade)) = image.get(ix, iy) {
                    self.put_char(
                        x.saturating_add(ix),
                        y.saturating_add(iy),
                        ch,
                        CellStyle::shade(shade),
                    );
                }
            }
        }
    }

    /// Characters of row `y` as a string.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y).map(|c| c.ch))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(1, 0, "abcdef", CellStyle::default());
        assert_eq!(fb.row_text(0), " abc");
    }

    #[test]
    fn blit_copies_glyphs_and_shades() {
        let mut img = GlyphImage::new(2, 2);
        img.set(0, 0, 'K', Shade::Cyan);
        img.set(1, 1, '#', Shade::Gray);

        let mut fb = FrameBuffer::new(5, 3);
        fb.blit(3, 1, &img);

        assert_eq!(fb.get(3, 1).map(|c| c.ch), Some('K'));
        assert_eq!(
            fb.get(3, 1).map(|c| c.style),
            Some(CellStyle::shade(Shade::Cyan))
        );
        assert_eq!(fb.get(4, 2).map(|c| c.ch), Some('#'));
    }

    #[test]
    fn blit_clips_partially_offscreen_image() {
        let mut img = GlyphImage::new(3, 1);
        img.set(0, 0, 'a', Shade::White);
        img.set(1, 0, 'b', Shade::White);
        img.set(2, 0, 'c', Shade::White);

        let mut fb = FrameBuffer::new(4, 1);
        fb.blit(2, 0, &img);
        assert_eq!(fb.row_text(0), "  ab");
    }

    #[test]
    fn resize_keeps_cell_count_consistent() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(3, 4);
        assert_eq!(fb.cells().len(), 12);
        fb.resize(1, 1);
        assert_eq!(fb.cells().len(), 1);
    }
}
