use super::Sampler;
use crate::color::PaletteIndex;
use crate::error::{FluxError, Result};
use crate::geometry::{lerp_1d_from_2d, SamplerPoint};
use crate::gradient::Gradient;

/// Walks a palette ramp by `x + y` of the sampler point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientSampler {
    gradient: Gradient,
}

impl GradientSampler {
    /// Takes ownership of the ramp. An empty ramp has nothing to sample.
    pub fn new(gradient: Gradient) -> Result<Self> {
        if gradient.is_empty() {
            return Err(FluxError::EmptyGradient);
        }
        Ok(Self { gradient })
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }
}

impl Sampler for GradientSampler {
    fn sample(&self, point: SamplerPoint) -> PaletteIndex {
        let point = SamplerPoint::new(point.x.max(0.0), point.y.max(0.0));
        let colors = self.gradient.colors();
        let last = colors.len() - 1;
        // NaN rounds to 0 through the cast; the sum is capped at 1 so the
        // index never exceeds `last`.
        let index = lerp_1d_from_2d(0.0, last as f64, point).round() as usize;
        colors[index.min(last)]
    }
}
