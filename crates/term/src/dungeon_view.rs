//! DungeonView: composes a session into a terminal framebuffer.
//!
//! Layout, for a terminal of `W` x `H` cells:
//!
//! ```text
//! +---------------------------+----------+
//! | 3D view (W-20) x (H-6)    | minimap  |
//! |                           | 20 x 10  |
//! +---------------------------+----------+
//! | Position / Direction                 |
//! | Keys                                 |
//! | Controls legend                      |
//! | last event message                   |
//! +--------------------------------------+
//! ```
//!
//! This module is pure (no I/O). It can be unit-tested.

use ascii_dungeon_core::Session;

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::image::GlyphImage;
use crate::minimap::render_minimap;
use crate::palette::Shade;
use crate::raycast::Raycaster;
use crate::types::{CONTROLS_LEGEND, HUD_ROWS, MINIMAP_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Size of the 3D view: the terminal minus the minimap column and HUD rows.
    pub fn view_size(&self) -> (u16, u16) {
        (
            self.width.saturating_sub(MINIMAP_WIDTH),
            self.height.saturating_sub(HUD_ROWS),
        )
    }
}

/// Holds the raycaster and minimap images so frames reuse their buffers.
#[derive(Debug, Clone, Default)]
pub struct DungeonView {
    raycaster: Raycaster,
    minimap: GlyphImage,
}

impl DungeonView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raycaster(&self) -> &Raycaster {
        &self.raycaster
    }

    pub fn minimap(&self) -> &GlyphImage {
        &self.minimap
    }

    /// Render into a fresh framebuffer sized to `viewport`.
    pub fn render(&mut self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&mut self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::shade(Shade::Black),
        });

        let (view_w, view_h) = viewport.view_size();
        let view = self
            .raycaster
            .render(session.grid(), session.actor(), view_w, view_h);
        fb.blit(0, 0, view);

        render_minimap(session.grid(), session.actor(), &mut self.minimap);
        fb.blit(view_w, 0, &self.minimap);

        self.draw_hud(fb, session, view_h);
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, session: &Session, top: u16) {
        let actor = session.actor();
        let text = CellStyle::shade(Shade::Gray);

        let position = format!(
            "Position: ({:.2}, {:.2})  Direction: {}",
            actor.x(),
            actor.y(),
            actor.facing().as_str()
        );
        fb.put_str(0, top, &position, text);
        fb.put_str(0, top.saturating_add(1), &format!("Keys: {}", actor.keys()), text);
        fb.put_str(
            0,
            top.saturating_add(2),
            CONTROLS_LEGEND,
            CellStyle::shade(Shade::DarkGray),
        );

        if let Some(message) = session.last_message() {
            fb.put_str(
                0,
                top.saturating_add(3),
                message,
                CellStyle::shade(Shade::Yellow).bold(),
            );
        }
    }
}
