//! Palette ramps

use crate::color::{Color, PaletteIndex};
use crate::target::PaletteTarget;

/// Ordered run of palette slots, first to last along the ramp
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gradient {
    colors: Vec<PaletteIndex>,
}

impl Gradient {
    pub fn from_colors(colors: Vec<PaletteIndex>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[PaletteIndex] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Writes color ramps into a palette
pub struct GradientBuilder<'a, P: PaletteTarget + ?Sized> {
    palette: &'a mut P,
}

impl<'a, P: PaletteTarget + ?Sized> GradientBuilder<'a, P> {
    pub fn new(palette: &'a mut P) -> Self {
        Self { palette }
    }

    /// Fill slots `starting_index..num_steps` with a ramp from `from`
    /// towards `to`, returning those slots in order.
    ///
    /// The step size is `1 / num_steps` regardless of where the ramp starts,
    /// so the last slot stops short of `to`. Slots outside the range are left
    /// alone; keeping ramps from overlapping is up to the caller.
    pub fn create_gradient(
        &mut self,
        from: Color,
        to: Color,
        num_steps: PaletteIndex,
        starting_index: PaletteIndex,
    ) -> Gradient {
        let mut colors = Vec::with_capacity(num_steps.saturating_sub(starting_index) as usize);
        for i in starting_index..num_steps {
            let t = (1.0 / num_steps as f64) * (i - starting_index) as f64;
            self.palette.set_palette_color(i, Color::lerp(from, to, t));
            colors.push(i);
        }
        log::debug!(
            "gradient {:?} -> {:?}: {} slots from {}",
            from,
            to,
            colors.len(),
            starting_index
        );
        Gradient { colors }
    }
}
