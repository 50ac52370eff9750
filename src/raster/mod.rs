//! Line and polygon rasterization into a palette-indexed target

mod line;
mod poly;

pub use line::{points_between, BresenhamIter, LineRasterizer};
pub use poly::{make_poly_sampler_points, Poly, PolyRasterizer};
