//! Raycaster: projects the grid into a pseudo-3D glyph image.
//!
//! One ray per column, spread evenly across a 60° field of view. Each ray is
//! marched in 0.01-cell steps until it enters a non-empty cell or reaches the
//! maximum depth, then the column is split into bands:
//!
//! ```text
//!   ceiling   ░░░   (cyan)
//!   wall      █▓▒   (distance + face shading, doors '+', keys 'K')
//!   runner    ▓▒    (2 rows, same color as the wall)
//!   floor     # x . (darker toward the horizon)
//! ```
//!
//! The raycaster only borrows the map and the actor; it never mutates either.

use ascii_dungeon_core::{Actor, CellSource};

use crate::image::GlyphImage;
use crate::palette::Shade;
use crate::types::{
    normalize_angle, CellKind, COLOR_REUSE_THRESHOLD, FIELD_OF_VIEW, MAX_DEPTH,
    MIN_CORRECTED_DISTANCE, RAY_STEP, RUNNER_WALL_ROWS,
};

const CEILING_GLYPH: char = '░';
const DOOR_GLYPH: char = '+';
const KEY_GLYPH: char = 'K';

/// Fractional distance from a cell edge that counts as "on" that edge.
const FACE_THRESHOLD: f64 = 0.1;

/// Projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastConfig {
    pub fov: f64,
    pub max_depth: f64,
    pub step: f64,
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self {
            fov: FIELD_OF_VIEW,
            max_depth: MAX_DEPTH,
            step: RAY_STEP,
        }
    }
}

/// Result of marching one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance along the ray (uncorrected).
    pub distance: f64,
    /// What stopped the ray. `Wall` when it ran out of depth.
    pub kind: CellKind,
    pub hit_x: f64,
    pub hit_y: f64,
    /// The ray found nothing before `max_depth`.
    pub reached_max_depth: bool,
}

/// Which way the struck face points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallFace {
    /// Face perpendicular to the x axis.
    NorthSouth,
    /// Face perpendicular to the y axis; drawn one shade darker.
    EastWest,
}

/// March a ray from (origin_x, origin_y) along `angle`.
///
/// Distances are `i * step` rather than a running sum, so the hit distance is
/// exact to one step.
pub fn cast_ray<M: CellSource + ?Sized>(
    map: &M,
    origin_x: f64,
    origin_y: f64,
    angle: f64,
    config: &RaycastConfig,
) -> RayHit {
    let (dir_x, dir_y) = (angle.cos(), angle.sin());
    let steps = (config.max_depth / config.step).round() as u32;

    for i in 1..=steps {
        let distance = i as f64 * config.step;
        let hit_x = origin_x + dir_x * distance;
        let hit_y = origin_y + dir_y * distance;
        let kind = map.cell_at_point(hit_x, hit_y);
        if kind.stops_ray() {
            return RayHit {
                distance,
                kind,
                hit_x,
                hit_y,
                reached_max_depth: false,
            };
        }
    }

    RayHit {
        distance: config.max_depth,
        kind: CellKind::Wall,
        hit_x: origin_x + dir_x * config.max_depth,
        hit_y: origin_y + dir_y * config.max_depth,
        reached_max_depth: true,
    }
}

/// Infer the struck face from the hit point's position inside its cell.
pub fn wall_face(hit_x: f64, hit_y: f64) -> WallFace {
    let frac_x = hit_x - hit_x.floor();
    let frac_y = hit_y - hit_y.floor();

    if frac_x < FACE_THRESHOLD || frac_x > 1.0 - FACE_THRESHOLD {
        WallFace::NorthSouth
    } else if frac_y < FACE_THRESHOLD || frac_y > 1.0 - FACE_THRESHOLD {
        WallFace::EastWest
    } else if frac_x < frac_y {
        WallFace::NorthSouth
    } else {
        WallFace::EastWest
    }
}

/// Wall color by distance, darkened one step on east-west faces.
pub fn wall_shade(distance: f64, max_depth: f64, face: WallFace) -> Shade {
    let ratio = distance / max_depth;
    let base = if ratio < 0.2 {
        Shade::White
    } else if ratio < 0.4 {
        Shade::Gray
    } else if ratio < 0.6 {
        Shade::DarkGray
    } else if ratio < 0.8 {
        Shade::DarkBlue
    } else {
        Shade::Black
    };

    match face {
        WallFace::NorthSouth => base,
        WallFace::EastWest => base.darken(),
    }
}

fn wall_glyph(distance: f64, max_depth: f64) -> char {
    if distance < max_depth / 3.0 {
        '█'
    } else if distance < max_depth / 2.0 {
        '▓'
    } else {
        '▒'
    }
}

fn runner_glyph(distance: f64, max_depth: f64) -> char {
    if distance < max_depth / 3.0 {
        '▓'
    } else {
        '▒'
    }
}

/// Floor glyph and shade for row `y`, graded by distance from the
/// vertical center.
fn floor_cell(y: i32, height: i32) -> (char, Shade) {
    let half = height / 2;
    let b = if half == 0 {
        0.0
    } else {
        1.0 - (y - half) as f64 / half as f64
    };

    if b < 0.25 {
        ('#', Shade::DarkGreen)
    } else if b < 0.5 {
        ('x', Shade::Green)
    } else if b < 0.75 {
        ('.', Shade::Gray)
    } else {
        (' ', Shade::Black)
    }
}

/// Row boundaries of one projected column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnBands {
    /// Rows `[0, ceiling)` are ceiling. Negative when the wall overflows.
    pub ceiling: i32,
    /// Rows `[ceiling, floor)` are wall.
    pub floor: i32,
    /// Rows `[floor, runner_end)` are the runner band; the rest is floor.
    pub runner_end: i32,
}

impl ColumnBands {
    pub fn new(height: i32, corrected_distance: f64) -> Self {
        let wall_height = (height as f64 / corrected_distance) as i32;
        let ceiling = (height - wall_height) / 2;
        let floor = height - ceiling;
        let runner_end = height.min(floor + RUNNER_WALL_ROWS);
        Self {
            ceiling,
            floor,
            runner_end,
        }
    }
}

/// Owns the projected frame and reuses it between calls.
#[derive(Debug, Clone, Default)]
pub struct Raycaster {
    config: RaycastConfig,
    frame: GlyphImage,
}

impl Raycaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RaycastConfig) -> Self {
        Self {
            config,
            frame: GlyphImage::default(),
        }
    }

    /// Most recently rendered frame.
    pub fn frame(&self) -> &GlyphImage {
        &self.frame
    }

    /// Project `map` as seen by `actor` into a `width` x `height` image.
    pub fn render<M: CellSource + ?Sized>(
        &mut self,
        map: &M,
        actor: &Actor,
        width: u16,
        height: u16,
    ) -> &GlyphImage {
        self.frame.resize(width, height);
        if width == 0 || height == 0 {
            return &self.frame;
        }

        let cfg = self.config;
        let h = height as i32;
        let angle_step = cfg.fov / width as f64;
        let start_angle = actor.angle() - cfg.fov / 2.0;

        // Same-frame smoothing: near-equal neighbours share a color.
        let mut prev_distance = 0.0;
        let mut prev_shade = Shade::Black;

        for x in 0..width {
            let ray_angle = normalize_angle(start_angle + x as f64 * angle_step);
            let hit = cast_ray(map, actor.x(), actor.y(), ray_angle, &cfg);

            let corrected =
                (hit.distance * (ray_angle - actor.angle()).cos()).max(MIN_CORRECTED_DISTANCE);
            let bands = ColumnBands::new(h, corrected);

            let shade = if (corrected - prev_distance).abs() < COLOR_REUSE_THRESHOLD {
                prev_shade
            } else {
                wall_shade(corrected, cfg.max_depth, wall_face(hit.hit_x, hit.hit_y))
            };
            prev_distance = corrected;
            prev_shade = shade;

            let (wall_ch, wall_sh) = match hit.kind {
                CellKind::DoorClosed | CellKind::DoorOpen => (DOOR_GLYPH, Shade::Yellow),
                CellKind::Key => (KEY_GLYPH, Shade::Magenta),
                CellKind::Wall | CellKind::Empty => (wall_glyph(corrected, cfg.max_depth), shade),
            };
            let runner_ch = runner_glyph(corrected, cfg.max_depth);

            for y in 0..h {
                let (ch, sh) = if y < bands.ceiling {
                    (CEILING_GLYPH, Shade::Cyan)
                } else if y < bands.floor {
                    (wall_ch, wall_sh)
                } else if y < bands.runner_end {
                    (runner_ch, shade)
                } else {
                    floor_cell(y, h)
                };
                self.frame.set(x, y as u16, ch, sh);
            }
        }

        &self.frame
    }
}
