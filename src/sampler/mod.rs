//! Samplers map an interpolation coordinate to a palette index.
//!
//! Every rasterizer path colors pixels through one of these, so a shape can
//! be flat, ramped, or have individual sampler points picked out without the
//! rasterizer knowing which.

mod flat;
mod gradient;
mod point;

pub use flat::FlatSampler;
pub use gradient::GradientSampler;
pub use point::PointSampler;

use crate::color::PaletteIndex;
use crate::geometry::SamplerPoint;

/// Trait for all color samplers
pub trait Sampler {
    /// Palette index at a sampler point. Must be a pure function of `point`.
    fn sample(&self, point: SamplerPoint) -> PaletteIndex;
}

impl<S: Sampler + ?Sized> Sampler for &S {
    fn sample(&self, point: SamplerPoint) -> PaletteIndex {
        (**self).sample(point)
    }
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    fn sample(&self, point: SamplerPoint) -> PaletteIndex {
        (**self).sample(point)
    }
}
