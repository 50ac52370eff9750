//! What the core needs from whoever owns the framebuffer and palette

use crate::color::{Color, PaletteIndex};
use crate::error::OutOfBounds;
use crate::geometry::Point;

/// A palette-indexed framebuffer the rasterizers write into
pub trait PixelTarget {
    /// Logical size in pixels (width in `x`, height in `y`)
    fn size(&self) -> Point;

    /// Write one pixel. Fails if `x >= width` or `y >= height`.
    fn draw_back_pixel(&mut self, x: u32, y: u32, index: PaletteIndex) -> Result<(), OutOfBounds>;

    /// Set every pixel to one palette index
    fn fill_back(&mut self, index: PaletteIndex) {
        let size = self.size();
        for y in 0..size.y {
            for x in 0..size.x {
                let _ = self.draw_back_pixel(x, y, index);
            }
        }
    }
}

/// The palette table the gradient builder writes ramps into
pub trait PaletteTarget {
    fn set_palette_color(&mut self, index: PaletteIndex, color: Color);
}
