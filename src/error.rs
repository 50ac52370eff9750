use thiserror::Error;

use crate::color::PaletteIndex;

/// Main error type for flux operations
#[derive(Error, Debug)]
pub enum FluxError {
    #[error("invalid 6-bit channel {channel}: {value} (max 63)")]
    InvalidChannel { channel: char, value: u8 },

    #[error("polygon is not closed: first point {first:?}, last point {last:?}")]
    UnclosedPolygon {
        first: Option<(u32, u32)>,
        last: Option<(u32, u32)>,
    },

    #[error("gradient has no colors")]
    EmptyGradient,

    #[error("palette index {0} was used but never set")]
    UnsetPaletteEntry(PaletteIndex),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("display error: {0}")]
    Display(String),
}

/// Signalled by a pixel write that falls outside the framebuffer.
///
/// Lines stop at the first one of these, fills and wall slices just skip
/// the pixel.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("pixel ({x}, {y}) outside {width}x{height} framebuffer")]
pub struct OutOfBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

pub type Result<T> = std::result::Result<T, FluxError>;
