//! Console palette used by the renderer.
//!
//! The 3D view shades with a handful of classic 16-color console colors; the
//! framebuffer stores 24-bit color, so each shade maps to a fixed RGB value.

use crate::fb::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shade {
    #[default]
    Black,
    DarkBlue,
    DarkGreen,
    DarkYellow,
    DarkGray,
    Gray,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl Shade {
    pub const fn rgb(self) -> Rgb {
        match self {
            Shade::Black => Rgb::new(0, 0, 0),
            Shade::DarkBlue => Rgb::new(0, 0, 128),
            Shade::DarkGreen => Rgb::new(0, 128, 0),
            Shade::DarkYellow => Rgb::new(128, 128, 0),
            Shade::DarkGray => Rgb::new(128, 128, 128),
            Shade::Gray => Rgb::new(192, 192, 192),
            Shade::Green => Rgb::new(0, 255, 0),
            Shade::Cyan => Rgb::new(0, 255, 255),
            Shade::Red => Rgb::new(255, 0, 0),
            Shade::Magenta => Rgb::new(255, 0, 255),
            Shade::Yellow => Rgb::new(255, 255, 0),
            Shade::White => Rgb::new(255, 255, 255),
        }
    }

    /// One step darker along the wall-lighting ramp
    /// `White -> Gray -> DarkGray -> DarkBlue -> Black`.
    ///
    /// Anything off the ramp goes straight to black.
    pub const fn darken(self) -> Shade {
        match self {
            Shade::White => Shade::Gray,
            Shade::Gray => Shade::DarkGray,
            Shade::DarkGray => Shade::DarkBlue,
            _ => Shade::Black,
        }
    }
}
