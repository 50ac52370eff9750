use super::Sampler;
use crate::color::PaletteIndex;
use crate::geometry::SamplerPoint;

/// One color everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlatSampler {
    pub color: PaletteIndex,
}

impl FlatSampler {
    pub const fn new(color: PaletteIndex) -> Self {
        Self { color }
    }
}

impl Sampler for FlatSampler {
    fn sample(&self, _point: SamplerPoint) -> PaletteIndex {
        self.color
    }
}
