//! Host settings: window size, presentation and ray marching constants.
//!
//! Loaded from an optional JSON file, then overridden from the command line.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::buffer::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{FluxError, Result};
use crate::world::MarchConfig;

/// Largest accepted framebuffer width or height
pub const MAX_DIMENSION: u32 = 16384;
/// Largest accepted wall height multiplier
pub const MAX_HEIGHT_MULTIPLIER: f64 = 1000.0;
/// Largest accepted ray step count
pub const MAX_MARCH_DEPTH: u32 = 100_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logical framebuffer width in pixels
    pub width: u32,
    /// Logical framebuffer height in pixels
    pub height: u32,
    /// Window pixels per framebuffer pixel
    pub scale: u32,
    pub vsync: bool,
    /// World file to load; a built-in demo world is used when unset
    pub world: Option<PathBuf>,
    pub march: MarchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: 4,
            vsync: true,
            world: None,
            march: MarchConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)
            .map_err(|e| FluxError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Build config from command line arguments (program name excluded).
    ///
    /// `--config <path>` is read first wherever it appears; every other flag
    /// overrides what the file set.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut config = match args.iter().position(|a| a == "--config") {
            Some(i) => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| FluxError::Config("--config needs a path".into()))?;
                Self::load(path)?
            },
            None => Self::default(),
        };
        config.apply_args(args)?;
        Ok(config)
    }

    /// Apply command line overrides
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--no-vsync" => self.vsync = false,
                "--width" | "-w" => {
                    self.width = parse_value(args, i)?;
                    i += 1;
                },
                "--height" | "-h" => {
                    self.height = parse_value(args, i)?;
                    i += 1;
                },
                "--scale" | "-s" => {
                    self.scale = parse_value(args, i)?;
                    i += 1;
                },
                "--world" => {
                    self.world = Some(PathBuf::from(value_of(args, i)?));
                    i += 1;
                },
                "--config" => i += 1,
                other => return Err(FluxError::Config(format!("unknown argument {:?}", other))),
            }
            i += 1;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FluxError::Config(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(FluxError::Config(format!(
                "resolution {}x{} exceeds {} per side",
                self.width, self.height, MAX_DIMENSION
            )));
        }
        if self.scale == 0 {
            return Err(FluxError::Config("scale must be at least 1".into()));
        }
        let march = &self.march;
        if !(march.march_size.is_finite() && march.march_size > 0.0) {
            return Err(FluxError::Config(format!(
                "march_size must be positive, got {}",
                march.march_size
            )));
        }
        if !(0.0..=MAX_HEIGHT_MULTIPLIER).contains(&march.height_multiplier) {
            return Err(FluxError::Config(format!(
                "height_multiplier must be within 0..={}, got {}",
                MAX_HEIGHT_MULTIPLIER, march.height_multiplier
            )));
        }
        if march.max_depth > MAX_MARCH_DEPTH {
            return Err(FluxError::Config(format!(
                "max_depth must be at most {}, got {}",
                MAX_MARCH_DEPTH, march.max_depth
            )));
        }
        Ok(())
    }
}

fn value_of(args: &[String], flag: usize) -> Result<&str> {
    args.get(flag + 1)
        .map(String::as_str)
        .ok_or_else(|| FluxError::Config(format!("{} needs a value", args[flag])))
}

fn parse_value(args: &[String], flag: usize) -> Result<u32> {
    let value = value_of(args, flag)?;
    value
        .parse()
        .map_err(|e| FluxError::Config(format!("{} {:?}: {}", args[flag], value, e)))
}
