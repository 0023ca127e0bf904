//! Terminal rendering for the dungeon.
//!
//! Rendering is split into pure stages that can be tested without a terminal:
//! the [`Raycaster`] and [`render_minimap`] produce [`GlyphImage`]s,
//! [`DungeonView`] composes them with the HUD into a [`FrameBuffer`], and only
//! [`TerminalRenderer`] talks to crossterm.

pub mod dungeon_view;
pub mod fb;
pub mod image;
pub mod minimap;
pub mod palette;
pub mod raycast;
pub mod renderer;

pub use ascii_dungeon_core as core;
pub use ascii_dungeon_types as types;

pub use dungeon_view::{DungeonView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use image::GlyphImage;
pub use minimap::{minimap_cell, render_minimap};
pub use palette::Shade;
pub use raycast::{
    cast_ray, wall_face, wall_shade, ColumnBands, RayHit, RaycastConfig, Raycaster, WallFace,
};
pub use renderer::{encode_diff_into, encode_full_into, terminal_viewport, TerminalRenderer};
