//! Imaging configuration.
//!
//! The pipeline itself takes every dimension as a parameter; this module
//! holds the two bounding-box constants the surrounding application treats
//! as configuration, plus the directory capture temp files land in. Loaded
//! from a TOML file when one exists, stock defaults otherwise.

use crate::imaging::BoundingBox;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Stock bound for decoded display images when no config file overrides it.
pub const DEFAULT_IMAGE_WIDTH: u32 = 1024;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 768;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Caller-facing knobs for the ingestion pipeline.
///
/// All fields have defaults, so a partial file only overrides what it
/// names. Unknown keys are rejected rather than silently ignored; a typo
/// in a config file should fail loudly, not produce a default-sized image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagingConfig {
    /// Maximum width of a decoded display image.
    pub default_image_width: u32,
    /// Maximum height of a decoded display image.
    pub default_image_height: u32,
    /// Where capture temp files are allocated. `None` = system temp dir.
    pub capture_dir: Option<PathBuf>,
}

impl Default for ImagingConfig {
    fn default() -> Self {
        Self {
            default_image_width: DEFAULT_IMAGE_WIDTH,
            default_image_height: DEFAULT_IMAGE_HEIGHT,
            capture_dir: None,
        }
    }
}

impl ImagingConfig {
    /// Load from a TOML file. A missing file yields the defaults; a file
    /// that exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// The configured decode bound.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.default_image_width, self.default_image_height)
    }

    /// The directory capture temp files are allocated in.
    pub fn capture_dir(&self) -> PathBuf {
        self.capture_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }
}
