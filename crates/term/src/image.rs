//! Glyph images: a character matrix with a parallel shade matrix.
//!
//! The raycaster and minimap produce these; the dungeon view copies them into
//! the terminal framebuffer.

use crate::palette::Shade;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphImage {
    width: u16,
    height: u16,
    glyphs: Vec<char>,
    shades: Vec<Shade>,
}

impl GlyphImage {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            glyphs: vec![' '; len],
            shades: vec![Shade::Black; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocations when possible. Contents are unspecified
    /// afterwards; callers overwrite every cell.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.glyphs.resize(len, ' ');
        self.shades.resize(len, Shade::Black);
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: char, shade: Shade) {
        if let Some(i) = self.idx(x, y) {
            self.glyphs[i] = glyph;
            self.shades[i] = shade;
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<(char, Shade)> {
        self.idx(x, y).map(|i| (self.glyphs[i], self.shades[i]))
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn shades(&self) -> &[Shade] {
        &self.shades
    }

    /// One row of glyphs as a string (tests and debugging).
    pub fn row_string(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y).map(|(c, _)| c))
            .collect()
    }

    /// One column of glyphs, top to bottom.
    pub fn column_string(&self, x: u16) -> String {
        (0..self.height)
            .filter_map(|y| self.get(x, y).map(|(c, _)| c))
            .collect()
    }
}
