//! Screen points, interpolation coordinates and the lerp helpers that map
//! between them

use std::collections::HashMap;
use std::f64::consts::PI;
use std::ops::{Add, Div, Mul, Sub};

/// Integer screen coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Component-wise float division, used to normalize into sampler space
    pub fn div_to_sampler_point(self, rhs: Point) -> SamplerPoint {
        SamplerPoint::new(self.x as f64 / rhs.x as f64, self.y as f64 / rhs.y as f64)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Point {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div for Point {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

/// Coordinate in interpolation space. Not clamped to 0..1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SamplerPoint {
    pub x: f64,
    pub y: f64,
}

impl SamplerPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Angle in degrees, as cameras are specified
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Degree(pub f64);

/// Angle in radians, as `f64::sin`/`f64::cos` expect
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Radian(pub f64);

impl Degree {
    #[inline]
    pub fn to_radians(self) -> Radian {
        Radian(self.0 * (PI / 180.0))
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Collapse a 2D sampler point onto a 1D ramp: both axes add up to one
/// interpolation factor, capped at 1.
#[inline]
pub fn lerp_1d_from_2d(a: f64, b: f64, point: SamplerPoint) -> f64 {
    lerp(a, b, (point.x + point.y).min(1.0))
}

/// Interpolate between two sampler points by where `at` sits on the segment
/// `p0 -> p1`.
///
/// Each axis uses its own ratio. An axis with no extent keeps `s0`.
pub fn point_and_sampler_lerp(
    p0: Point,
    p1: Point,
    s0: SamplerPoint,
    s1: SamplerPoint,
    at: Point,
) -> SamplerPoint {
    let x = if p0.x == p1.x {
        s0.x
    } else {
        let ratio = (at.x as f64 - p0.x as f64) / (p1.x as f64 - p0.x as f64);
        lerp(s0.x, s1.x, ratio)
    };
    let y = if p0.y == p1.y {
        s0.y
    } else {
        let ratio = (at.y as f64 - p0.y as f64) / (p1.y as f64 - p0.y as f64);
        lerp(s0.y, s1.y, ratio)
    };
    SamplerPoint::new(x, y)
}

/// Euclidean distance between two screen points
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x as f64 - b.x as f64;
    let dy = a.y as f64 - b.y as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Inverse-distance weighted blend of every vertex's sampler point.
///
/// Not barycentric: every vertex in `points` contributes, repeated vertices
/// contribute once per occurrence. A query that lands on a vertex returns
/// that vertex's sampler point. Vertices missing from `sampler_points` are
/// ignored; if none are mapped the origin is returned.
pub fn weighted_average_lerp(
    points: &[Point],
    sampler_points: &HashMap<Point, SamplerPoint>,
    at: Point,
) -> SamplerPoint {
    let mut weighted_x = 0.0;
    let mut weighted_y = 0.0;
    let mut total_weight = 0.0;

    for point in points {
        let Some(&sampler) = sampler_points.get(point) else {
            continue;
        };

        let dist = distance(at, *point);
        if dist == 0.0 {
            return sampler;
        }

        let weight = 1.0 / dist;
        weighted_x += sampler.x * weight;
        weighted_y += sampler.y * weight;
        total_weight += weight;
    }

    if total_weight == 0.0 {
        return SamplerPoint::default();
    }

    SamplerPoint::new(weighted_x / total_weight, weighted_y / total_weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_ops() {
        let a = Point::new(6, 8);
        let b = Point::new(2, 4);
        assert_eq!(a + b, Point::new(8, 12));
        assert_eq!(a - b, Point::new(4, 4));
        assert_eq!(a * b, Point::new(12, 32));
        assert_eq!(a / b, Point::new(3, 2));
        assert_eq!(b.div_to_sampler_point(a), SamplerPoint::new(2.0 / 6.0, 0.5));
    }

    #[test]
    fn test_degree_to_radians() {
        assert!((Degree(180.0).to_radians().0 - PI).abs() < 1e-12);
        assert!((Degree(90.0).to_radians().0 - PI / 2.0).abs() < 1e-12);
        assert_eq!(Degree(0.0).to_radians(), Radian(0.0));
    }

    #[test]
    fn test_lerp_1d_from_2d_sums_and_caps() {
        assert_eq!(lerp_1d_from_2d(0.0, 10.0, SamplerPoint::new(0.0, 0.0)), 0.0);
        assert_eq!(lerp_1d_from_2d(0.0, 10.0, SamplerPoint::new(0.25, 0.25)), 5.0);
        assert_eq!(lerp_1d_from_2d(0.0, 10.0, SamplerPoint::new(1.0, 1.0)), 10.0);
    }

    #[test]
    fn test_point_and_sampler_lerp_midpoint() {
        let s = point_and_sampler_lerp(
            Point::new(0, 0),
            Point::new(10, 4),
            SamplerPoint::new(0.0, 0.0),
            SamplerPoint::new(1.0, 1.0),
            Point::new(5, 1),
        );
        assert_eq!(s, SamplerPoint::new(0.5, 0.25));
    }

    #[test]
    fn test_point_and_sampler_lerp_degenerate_axes() {
        let s0 = SamplerPoint::new(0.2, 0.3);
        let s1 = SamplerPoint::new(0.8, 0.9);
        // Vertical segment: x has no extent
        let v =
            point_and_sampler_lerp(Point::new(3, 0), Point::new(3, 10), s0, s1, Point::new(3, 5));
        assert_eq!(v.x, 0.2);
        assert!((v.y - 0.6).abs() < 1e-12);
        // Single point: both axes keep s0
        let p =
            point_and_sampler_lerp(Point::new(3, 3), Point::new(3, 3), s0, s1, Point::new(3, 3));
        assert_eq!(p, s0);
    }

    #[test]
    fn test_point_and_sampler_lerp_reversed_segment() {
        let s = point_and_sampler_lerp(
            Point::new(10, 10),
            Point::new(0, 0),
            SamplerPoint::new(1.0, 1.0),
            SamplerPoint::new(0.0, 0.0),
            Point::new(2, 8),
        );
        assert!((s.x - 0.2).abs() < 1e-12);
        assert!((s.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(distance(Point::new(3, 4), Point::new(0, 0)), 5.0);
    }

    #[test]
    fn test_weighted_average_at_vertex() {
        let points = [Point::new(0, 0), Point::new(4, 0), Point::new(0, 4)];
        let map: HashMap<_, _> = [
            (points[0], SamplerPoint::new(0.0, 0.0)),
            (points[1], SamplerPoint::new(1.0, 0.0)),
            (points[2], SamplerPoint::new(0.0, 1.0)),
        ]
        .into_iter()
        .collect();

        for p in points {
            assert_eq!(weighted_average_lerp(&points, &map, p), map[&p]);
        }
    }

    #[test]
    fn test_weighted_average_equidistant() {
        let points = [Point::new(0, 0), Point::new(4, 0)];
        let map: HashMap<_, _> = [
            (points[0], SamplerPoint::new(0.0, 0.0)),
            (points[1], SamplerPoint::new(1.0, 1.0)),
        ]
        .into_iter()
        .collect();
        let mid = weighted_average_lerp(&points, &map, Point::new(2, 0));
        assert!((mid.x - 0.5).abs() < 1e-12);
        assert!((mid.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_average_repeated_vertex_counts_twice() {
        let a = Point::new(0, 0);
        let b = Point::new(4, 0);
        let points = [a, b, a];
        let map: HashMap<_, _> = [
            (a, SamplerPoint::new(0.0, 0.0)),
            (b, SamplerPoint::new(1.0, 0.0)),
        ]
        .into_iter()
        .collect();
        // Equidistant, but `a` is listed twice: 1/3 weight on `b`
        let mid = weighted_average_lerp(&points, &map, Point::new(2, 0));
        assert!((mid.x - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_average_unmapped() {
        let points = [Point::new(1, 1)];
        let out = weighted_average_lerp(&points, &HashMap::new(), Point::new(5, 5));
        assert_eq!(out, SamplerPoint::default());
    }
}
