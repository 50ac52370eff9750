use std::collections::{BTreeMap, HashMap};

use super::line::{points_between, LineRasterizer};
use crate::error::{FluxError, Result};
use crate::geometry::{weighted_average_lerp, Point, SamplerPoint};
use crate::sampler::Sampler;
use crate::target::PixelTarget;

/// A closed outline (first point repeated at the end) with a sampler point
/// for each distinct vertex
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Poly {
    pub points: Vec<Point>,
    pub sampler_points: HashMap<Point, SamplerPoint>,
}

impl Poly {
    /// Build a polygon from a closed point list, deriving each vertex's
    /// sampler point from its position in the bounding box
    pub fn new(points: Vec<Point>) -> Result<Self> {
        let poly = Self {
            sampler_points: make_poly_sampler_points(&points),
            points,
        };
        if !poly.is_closed() {
            return Err(FluxError::UnclosedPolygon {
                first: poly.points.first().map(|p| (p.x, p.y)),
                last: poly.points.last().map(|p| (p.x, p.y)),
            });
        }
        Ok(poly)
    }

    /// True if there is at least one point and the last equals the first
    pub fn is_closed(&self) -> bool {
        matches!((self.points.first(), self.points.last()), (Some(a), Some(b)) if a == b)
    }

    #[inline]
    fn sampler_point(&self, point: Point) -> SamplerPoint {
        self.sampler_points.get(&point).copied().unwrap_or_default()
    }
}

/// Normalize every vertex into 0..1 relative to the bounding box.
///
/// An axis with no extent maps to 0.
pub fn make_poly_sampler_points(points: &[Point]) -> HashMap<Point, SamplerPoint> {
    let Some(first) = points.first() else {
        return HashMap::new();
    };

    let (mut min, mut max) = (*first, *first);
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    let extent = max - min;

    let normalize = |offset: u32, extent: u32| {
        if extent == 0 {
            0.0
        } else {
            offset as f64 / extent as f64
        }
    };

    points
        .iter()
        .map(|&p| {
            let offset = p - min;
            (
                p,
                SamplerPoint::new(normalize(offset.x, extent.x), normalize(offset.y, extent.y)),
            )
        })
        .collect()
}

/// Outline + scanline fill for closed polygons
pub struct PolyRasterizer<'a, T: PixelTarget + ?Sized> {
    target: &'a mut T,
}

impl<'a, T: PixelTarget + ?Sized> PolyRasterizer<'a, T> {
    pub fn new(target: &'a mut T) -> Self {
        Self { target }
    }

    /// Draw the outline with interpolated sampler points, then fill every
    /// row between its leftmost and rightmost border pixel.
    ///
    /// Interior pixels take the inverse-distance weighted blend of all
    /// vertex sampler points. Fill pixels outside the target are skipped one
    /// by one; the fill keeps going.
    ///
    /// # Panics
    /// Panics if the polygon is not closed.
    pub fn draw_poly<S: Sampler + ?Sized>(&mut self, poly: &Poly, sampler: &S) {
        assert!(poly.is_closed(), "polygon is not closed");

        {
            let mut lines = LineRasterizer::new(&mut *self.target);
            for edge in poly.points.windows(2) {
                lines.draw_line_with_sampler(
                    edge[0],
                    poly.sampler_point(edge[0]),
                    edge[1],
                    poly.sampler_point(edge[1]),
                    sampler,
                );
            }
        }

        // Row extents from the raw Bresenham border, independent of what the
        // outline pass managed to draw
        let mut rows: BTreeMap<u32, (u32, u32)> = BTreeMap::new();
        for edge in poly.points.windows(2) {
            for p in points_between(edge[0], edge[1]) {
                rows.entry(p.y)
                    .and_modify(|(min_x, max_x)| {
                        *min_x = (*min_x).min(p.x);
                        *max_x = (*max_x).max(p.x);
                    })
                    .or_insert((p.x, p.x));
            }
        }

        let min_y = poly.points.iter().map(|p| p.y).min().unwrap_or(0);
        let max_y = poly.points.iter().map(|p| p.y).max().unwrap_or(0);
        let mut filled = 0usize;

        for y in min_y..=max_y {
            let Some(&(min_x, max_x)) = rows.get(&y) else {
                log::warn!("polygon row {} has no border points, skipping", y);
                continue;
            };
            for x in min_x..=max_x {
                let at = Point::new(x, y);
                let blend = weighted_average_lerp(&poly.points, &poly.sampler_points, at);
                let color = sampler.sample(blend);
                if self.target.draw_back_pixel(x, y, color).is_ok() {
                    filled += 1;
                }
            }
        }

        log::debug!(
            "filled polygon with {} vertices: rows {}..={}, {} pixels",
            poly.points.len(),
            min_y,
            max_y,
            filled
        );
    }
}
