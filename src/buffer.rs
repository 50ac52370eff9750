use crate::color::{Color, PaletteIndex};
use crate::error::{FluxError, OutOfBounds, Result};
use crate::geometry::Point;
use crate::target::{PaletteTarget, PixelTarget};

pub const DEFAULT_WIDTH: u32 = 320;
pub const DEFAULT_HEIGHT: u32 = 200;

/// Number of palette slots addressable by a `PaletteIndex`
pub const PALETTE_SIZE: usize = 256;

// ============================================================================
// Utility Functions
// ============================================================================

/// Write ABGR pixel to slice (RGBA8888 little-endian byte order)
#[inline]
fn write_pixel(dest: &mut [u8], (r, g, b): (u8, u8, u8)) {
    dest[0] = 255; // A
    dest[1] = b; // B
    dest[2] = g; // G
    dest[3] = r; // R
}

// ============================================================================
// IndexedBuffer
// ============================================================================

/// Palette-indexed framebuffer plus the 256-entry palette it is resolved
/// against. This is the canvas everything in the crate renders to.
pub struct IndexedBuffer {
    pixels: Vec<PaletteIndex>,
    palette: [Color; PALETTE_SIZE],
    width: u32,
    height: u32,
}

impl IndexedBuffer {
    /// Create a new buffer with default resolution (320x200)
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a new buffer with custom resolution. Every pixel starts at
    /// index 0 and every palette slot starts unset.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize],
            palette: [Color::INVALID; PALETTE_SIZE],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Read a pixel back (bounds checked)
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<PaletteIndex> {
        if self.in_bounds(x, y) {
            Some(self.pixels[self.pixel_index(x, y)])
        } else {
            None
        }
    }

    /// Palette entry for a slot, `None` if it was never set to a valid color
    pub fn palette_color(&self, index: PaletteIndex) -> Option<Color> {
        let color = self.palette[index as usize];
        color.is_valid().then_some(color)
    }

    /// Raw index plane, row-major
    pub fn as_indices(&self) -> &[PaletteIndex] {
        &self.pixels
    }

    /// Resolve every pixel through the palette into RGBA8888 bytes
    /// (ABGR in memory, matching an SDL streaming texture).
    ///
    /// A pixel that references an unset palette slot is a configuration
    /// error and fails the whole frame.
    pub fn to_rgba(&self, dest: &mut Vec<u8>) -> Result<()> {
        dest.clear();
        dest.resize(self.pixels.len() * 4, 0);

        for (&index, chunk) in self.pixels.iter().zip(dest.chunks_exact_mut(4)) {
            let color = self
                .palette_color(index)
                .ok_or(FluxError::UnsetPaletteEntry(index))?;
            write_pixel(chunk, color.to_rgb8());
        }
        Ok(())
    }
}

impl Default for IndexedBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelTarget for IndexedBuffer {
    fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    fn draw_back_pixel(
        &mut self,
        x: u32,
        y: u32,
        index: PaletteIndex,
    ) -> std::result::Result<(), OutOfBounds> {
        if !self.in_bounds(x, y) {
            return Err(OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.pixel_index(x, y);
        self.pixels[idx] = index;
        Ok(())
    }

    fn fill_back(&mut self, index: PaletteIndex) {
        self.pixels.fill(index);
    }
}

impl PaletteTarget for IndexedBuffer {
    fn set_palette_color(&mut self, index: PaletteIndex, color: Color) {
        self.palette[index as usize] = color;
    }
}
