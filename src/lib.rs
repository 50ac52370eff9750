//! flux: a palette-indexed software rasterizer.
//!
//! Lines, sampler-interpolated polygon fills, palette gradients and a
//! fixed-step ray marcher over a world of rectangles, all drawn into any
//! [`PixelTarget`]. The SDL2 window lives behind the `sdl` feature.

pub mod buffer;
pub mod color;
pub mod config;
#[cfg(feature = "sdl")]
pub mod display;
pub mod error;
pub mod geometry;
pub mod gradient;
pub mod raster;
pub mod sampler;
pub mod target;
pub mod util;
pub mod world;

pub use buffer::IndexedBuffer;
pub use color::{Color, PaletteIndex};
pub use config::Config;
pub use error::{FluxError, OutOfBounds, Result};
pub use geometry::{Degree, Point, Radian, SamplerPoint};
pub use gradient::{Gradient, GradientBuilder};
pub use raster::{LineRasterizer, Poly, PolyRasterizer};
pub use sampler::{FlatSampler, GradientSampler, PointSampler, Sampler};
pub use target::{PaletteTarget, PixelTarget};
pub use world::{import_world, parse_world, MarchConfig, RayMarcher, RectWolf, WorldWolf};
