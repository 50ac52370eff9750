use crate::color::PaletteIndex;
use crate::geometry::{point_and_sampler_lerp, Point, SamplerPoint};
use crate::sampler::Sampler;
use crate::target::PixelTarget;

// ============================================================================
// Bresenham traversal
// ============================================================================

/// Integer Bresenham walk from one point to another, both ends included.
///
/// Both axes may advance on the same step, so diagonals come out as single
/// pixel staircases without corner fill-in. The polygon fill relies on this
/// exact point set for its row extents.
#[derive(Debug, Clone)]
pub struct BresenhamIter {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl BresenhamIter {
    pub fn new(p0: Point, p1: Point) -> Self {
        let (x0, y0) = (p0.x as i64, p0.y as i64);
        let (x1, y1) = (p1.x as i64, p1.y as i64);
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 > x1 { -1 } else { 1 },
            sy: if y0 > y1 { -1 } else { 1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        // Coordinates stay within the u32 range spanned by the endpoints
        let current = Point::new(self.x as u32, self.y as u32);

        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let rx = (self.x1 - self.x).unsigned_abs() as usize;
        let ry = (self.y1 - self.y).unsigned_abs() as usize;
        (rx.max(ry) + 1, Some(rx + ry + 1))
    }
}

/// Every grid point on the line from `p0` to `p1`, in order, both ends
/// included
pub fn points_between(p0: Point, p1: Point) -> Vec<Point> {
    BresenhamIter::new(p0, p1).collect()
}

// ============================================================================
// LineRasterizer
// ============================================================================

/// Draws Bresenham lines into a pixel target.
///
/// A line stops at the first pixel the target rejects. That is the only
/// clipping there is: anything after the first out-of-bounds pixel is
/// dropped.
pub struct LineRasterizer<'a, T: PixelTarget + ?Sized> {
    target: &'a mut T,
}

impl<'a, T: PixelTarget + ?Sized> LineRasterizer<'a, T> {
    pub fn new(target: &'a mut T) -> Self {
        Self { target }
    }

    /// Draw a solid line
    pub fn draw_line(&mut self, p0: Point, p1: Point, color: PaletteIndex) {
        for point in BresenhamIter::new(p0, p1) {
            if self.target.draw_back_pixel(point.x, point.y, color).is_err() {
                break;
            }
        }
    }

    /// Draw a line whose color comes from `sampler`, with the sampler point
    /// interpolated from `s0` at `p0` to `s1` at `p1`
    pub fn draw_line_with_sampler<S: Sampler + ?Sized>(
        &mut self,
        p0: Point,
        s0: SamplerPoint,
        p1: Point,
        s1: SamplerPoint,
        sampler: &S,
    ) {
        for point in BresenhamIter::new(p0, p1) {
            let color = sampler.sample(point_and_sampler_lerp(p0, p1, s0, s1, point));
            if self.target.draw_back_pixel(point.x, point.y, color).is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::IndexedBuffer;
    use crate::sampler::{FlatSampler, PointSampler};
    use pretty_assertions::assert_eq;

    fn pts(coords: &[(u32, u32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn assert_connected_path(p0: Point, p1: Point) {
        let points = points_between(p0, p1);
        assert_eq!(points.first(), Some(&p0));
        assert_eq!(points.last(), Some(&p1));

        let dx = (p1.x as i64 - p0.x as i64).unsigned_abs() as usize;
        let dy = (p1.y as i64 - p0.y as i64).unsigned_abs() as usize;
        assert!(points.len() <= dx + dy + 1);

        for pair in points.windows(2) {
            let step_x = (pair[1].x as i64 - pair[0].x as i64).abs();
            let step_y = (pair[1].y as i64 - pair[0].y as i64).abs();
            assert!(step_x <= 1 && step_y <= 1, "gap between {:?}", pair);
            assert!(step_x + step_y > 0, "repeated point {:?}", pair);
        }
    }

    #[test]
    fn test_single_point() {
        let p = Point::new(7, 3);
        assert_eq!(points_between(p, p), vec![p]);
    }

    #[test]
    fn test_horizontal_and_vertical() {
        assert_eq!(
            points_between(Point::new(1, 2), Point::new(4, 2)),
            pts(&[(1, 2), (2, 2), (3, 2), (4, 2)])
        );
        assert_eq!(
            points_between(Point::new(0, 3), Point::new(0, 0)),
            pts(&[(0, 3), (0, 2), (0, 1), (0, 0)])
        );
    }

    #[test]
    fn test_diagonal_steps_both_axes() {
        assert_eq!(
            points_between(Point::new(4, 0), Point::new(0, 4)),
            pts(&[(4, 0), (3, 1), (2, 2), (1, 3), (0, 4)])
        );
    }

    #[test]
    fn test_shallow_slope() {
        assert_eq!(
            points_between(Point::new(0, 0), Point::new(4, 2)),
            pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)])
        );
    }

    #[test]
    fn test_paths_are_connected() {
        let coords = [0, 1, 3, 7, 12, 20];
        for &x0 in &coords {
            for &y0 in &coords {
                for &x1 in &coords {
                    for &y1 in &coords {
                        assert_connected_path(Point::new(x0, y0), Point::new(x1, y1));
                    }
                }
            }
        }
    }

    #[test]
    fn test_iter_is_restartable() {
        let iter = BresenhamIter::new(Point::new(2, 9), Point::new(11, 1));
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_size_hint_bounds_length() {
        let iter = BresenhamIter::new(Point::new(0, 0), Point::new(9, 4));
        let (lo, hi) = iter.size_hint();
        let len = iter.count();
        assert!(lo <= len && len <= hi.unwrap());
    }

    #[test]
    fn test_draw_line_writes_points() {
        let mut buffer = IndexedBuffer::with_size(8, 8);
        LineRasterizer::new(&mut buffer).draw_line(Point::new(0, 0), Point::new(4, 2), 3);

        for p in points_between(Point::new(0, 0), Point::new(4, 2)) {
            assert_eq!(buffer.get_pixel(p.x, p.y), Some(3));
        }
        let lit = buffer.as_indices().iter().filter(|&&i| i == 3).count();
        assert_eq!(lit, 5);
    }

    #[test]
    fn test_draw_line_stops_at_first_out_of_bounds() {
        // Leaves the buffer at x = 4, then would come back in: nothing after
        // the exit gets drawn.
        let mut buffer = IndexedBuffer::with_size(4, 4);
        LineRasterizer::new(&mut buffer).draw_line(Point::new(0, 1), Point::new(6, 1), 1);
        assert_eq!(buffer.as_indices()[4..8].to_vec(), vec![1, 1, 1, 1]);

        let mut buffer = IndexedBuffer::with_size(4, 4);
        LineRasterizer::new(&mut buffer).draw_line(Point::new(6, 1), Point::new(0, 1), 1);
        assert!(buffer.as_indices().iter().all(|&i| i == 0));
    }

    #[test]
    fn test_draw_line_with_sampler_interpolates() {
        let mut buffer = IndexedBuffer::with_size(8, 1);
        let sampler = PointSampler::new(
            1,
            2,
            vec![
                SamplerPoint::new(0.0, 0.0),
                SamplerPoint::new(0.5, 0.0),
                SamplerPoint::new(1.0, 0.0),
            ],
        );
        LineRasterizer::new(&mut buffer).draw_line_with_sampler(
            Point::new(0, 0),
            SamplerPoint::new(0.0, 0.0),
            Point::new(4, 0),
            SamplerPoint::new(1.0, 0.0),
            &sampler,
        );
        // 0/4, 2/4, 4/4 hit exact sampler points; 1/4 and 3/4 do not
        assert_eq!(buffer.as_indices()[..5].to_vec(), vec![2, 1, 2, 1, 2]);
    }

    #[test]
    fn test_draw_line_with_sampler_degenerate_keeps_start() {
        let mut buffer = IndexedBuffer::with_size(4, 4);
        let s0 = SamplerPoint::new(0.25, 0.75);
        let sampler = PointSampler::new(1, 2, vec![s0]);
        LineRasterizer::new(&mut buffer).draw_line_with_sampler(
            Point::new(2, 2),
            s0,
            Point::new(2, 2),
            SamplerPoint::new(1.0, 1.0),
            &sampler,
        );
        assert_eq!(buffer.get_pixel(2, 2), Some(2));
    }

    #[test]
    fn test_draw_line_with_flat_sampler_clips() {
        let mut buffer = IndexedBuffer::with_size(3, 3);
        LineRasterizer::new(&mut buffer).draw_line_with_sampler(
            Point::new(0, 0),
            SamplerPoint::default(),
            Point::new(5, 5),
            SamplerPoint::default(),
            &FlatSampler::new(9),
        );
        assert_eq!(buffer.get_pixel(0, 0), Some(9));
        assert_eq!(buffer.get_pixel(1, 1), Some(9));
        assert_eq!(buffer.get_pixel(2, 2), Some(9));
    }

    #[test]
    fn test_draw_line_with_sampler_stops_at_first_out_of_bounds() {
        let mut buffer = IndexedBuffer::with_size(4, 4);
        LineRasterizer::new(&mut buffer).draw_line_with_sampler(
            Point::new(6, 1),
            SamplerPoint::default(),
            Point::new(0, 1),
            SamplerPoint::default(),
            &FlatSampler::new(9),
        );
        assert!(buffer.as_indices().iter().all(|&i| i == 0));

        let mut buffer = IndexedBuffer::with_size(4, 4);
        LineRasterizer::new(&mut buffer).draw_line_with_sampler(
            Point::new(0, 2),
            SamplerPoint::default(),
            Point::new(6, 2),
            SamplerPoint::default(),
            &FlatSampler::new(9),
        );
        assert_eq!(buffer.as_indices()[8..12].to_vec(), vec![9, 9, 9, 9]);
        assert_eq!(buffer.as_indices().iter().filter(|&&i| i == 9).count(), 4);
    }
}
