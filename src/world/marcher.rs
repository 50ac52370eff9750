//! Fixed-step ray marcher
//!
//! Walks a ray through the top-down world in equal steps until it lands
//! inside a rectangle, then draws one vertical wall slice per screen column.
//! Every column marches along the camera's heading; there is no angular fan
//! across the view.

use serde::{Deserialize, Serialize};

use super::{ObjectId, WorldWolf};
use crate::color::PaletteIndex;
use crate::geometry::{Degree, Point, SamplerPoint};
use crate::target::PixelTarget;

/// Palette index drawn for columns whose ray hits nothing
pub const BACKGROUND: PaletteIndex = 0;

/// Ray marching constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarchConfig {
    /// World units advanced per step
    pub march_size: f64,
    /// Wall half-height per unit of depth, times two
    pub height_multiplier: f64,
    /// Last step at which a hit still counts
    pub max_depth: u32,
}

impl Default for MarchConfig {
    fn default() -> Self {
        Self {
            march_size: 2.0,
            height_multiplier: 3.0,
            max_depth: 200,
        }
    }
}

/// Where a ray stopped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub object: ObjectId,
    pub color: PaletteIndex,
    pub depth: f64,
    pub steps: u32,
}

/// Grid cell under a ray position; negative positions are outside every
/// rectangle
#[inline]
fn grid_point(pos: SamplerPoint) -> Option<Point> {
    let in_range = |v: f64| v >= 0.0 && v < u32::MAX as f64;
    if in_range(pos.x) && in_range(pos.y) {
        Some(Point::new(pos.x as u32, pos.y as u32))
    } else {
        None
    }
}

pub struct RayMarcher<'a, T: PixelTarget + ?Sized> {
    target: &'a mut T,
    config: MarchConfig,
}

impl<'a, T: PixelTarget + ?Sized> RayMarcher<'a, T> {
    pub fn new(target: &'a mut T) -> Self {
        Self::with_config(target, MarchConfig::default())
    }

    pub fn with_config(target: &'a mut T, config: MarchConfig) -> Self {
        Self { target, config }
    }

    pub fn config(&self) -> &MarchConfig {
        &self.config
    }

    /// March one ray from `origin` along `rotation`.
    ///
    /// Checks the start position and then every step up to `max_depth`.
    /// Overlapping objects resolve to the lowest id.
    pub fn march_ray(
        &self,
        world: &WorldWolf,
        origin: Point,
        rotation: Degree,
    ) -> Option<RayHit> {
        let radians = rotation.to_radians().0;
        let step_x = radians.cos() * self.config.march_size;
        let step_y = radians.sin() * self.config.march_size;

        let mut pos = SamplerPoint::new(origin.x as f64, origin.y as f64);
        let mut depth = 0.0;

        for steps in 0..=self.config.max_depth {
            if let Some(rect) = grid_point(pos).and_then(|p| world.first_hit(p)) {
                return Some(RayHit {
                    object: rect.id,
                    color: rect.color,
                    depth,
                    steps,
                });
            }
            pos.x += step_x;
            pos.y += step_y;
            depth += self.config.march_size;
        }
        None
    }

    /// Render the world as seen from the camera, one wall slice per column.
    ///
    /// Columns whose ray misses are cleared to [`BACKGROUND`]. Slice pixels
    /// outside the target are dropped by its bounds check.
    pub fn render_world(
        &mut self,
        world: &WorldWolf,
        camera_pos: Point,
        camera_rotation: Degree,
    ) {
        let size = self.target.size();
        let mid = size.y / 2;

        for column in 0..=size.x {
            let Some(hit) = self.march_ray(world, camera_pos, camera_rotation) else {
                log::trace!("column {}: no hit", column);
                for y in 0..=size.y {
                    let _ = self.target.draw_back_pixel(column, y, BACKGROUND);
                }
                continue;
            };

            log::trace!("column {}: object {} at depth {}", column, hit.object, hit.depth);
            let height = (hit.depth * self.config.height_multiplier / 2.0).round() as u32;
            let bottom = mid.saturating_add(height).min(size.y);
            for y in mid.saturating_sub(height)..=bottom {
                let _ = self.target.draw_back_pixel(column, y, hit.color);
            }
        }
    }
}
