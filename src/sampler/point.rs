use super::Sampler;
use crate::color::PaletteIndex;
use crate::geometry::SamplerPoint;

/// Base color with a set of exact sampler points picked out in a highlight
/// color. Matching is bit-exact, nearby values do not count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSampler {
    pub color: PaletteIndex,
    pub point_color: PaletteIndex,
    pub points: Vec<SamplerPoint>,
}

impl PointSampler {
    pub fn new(color: PaletteIndex, point_color: PaletteIndex, points: Vec<SamplerPoint>) -> Self {
        Self {
            color,
            point_color,
            points,
        }
    }

    fn is_highlighted(&self, point: SamplerPoint) -> bool {
        self.points.iter().any(|p| {
            p.x.to_bits() == point.x.to_bits() && p.y.to_bits() == point.y.to_bits()
        })
    }
}

impl Sampler for PointSampler {
    fn sample(&self, point: SamplerPoint) -> PaletteIndex {
        if self.is_highlighted(point) {
            self.point_color
        } else {
            self.color
        }
    }
}
