//! 6-bit VGA-style colors and palette slots

use crate::error::{FluxError, Result};
use crate::geometry::lerp;

/// Slot in the 256-entry palette table
pub type PaletteIndex = u8;

/// Largest value a 6-bit channel can hold
pub const MAX_CHANNEL: u8 = (1 << 6) - 1;

/// Quantized RGB color, each channel 0..=63
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Sentinel for palette slots that were never set
    pub const INVALID: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Build a color, rejecting channels above 63
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Result<Self> {
        for (channel, value) in [('r', r), ('g', g), ('b', b)] {
            if value > MAX_CHANNEL {
                return Err(FluxError::InvalidChannel { channel, value });
            }
        }
        Ok(Self { r, g, b })
    }

    /// Build a color from known-good constants.
    ///
    /// # Panics
    /// Panics if any channel is above 63. Only use this for literals.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        assert!(
            r <= MAX_CHANNEL && g <= MAX_CHANNEL && b <= MAX_CHANNEL,
            "invalid 6-bit color channel"
        );
        Self { r, g, b }
    }

    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.r <= MAX_CHANNEL && self.g <= MAX_CHANNEL && self.b <= MAX_CHANNEL
    }

    /// Per-channel linear interpolation, rounded to the nearest step
    pub fn lerp(from: Self, to: Self, t: f64) -> Self {
        let channel = |a: u8, b: u8| {
            lerp(a as f64, b as f64, t)
                .round()
                .clamp(0.0, MAX_CHANNEL as f64) as u8
        };
        Self {
            r: channel(from.r, to.r),
            g: channel(from.g, to.g),
            b: channel(from.b, to.b),
        }
    }

    /// Expand to 8-bit channels for presentation
    #[inline]
    pub const fn to_rgb8(&self) -> (u8, u8, u8) {
        (self.r << 2, self.g << 2, self.b << 2)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::INVALID
    }
}
