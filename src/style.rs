//! Style file loading
//!
//! Layout spacing and SVG options can be overridden from a TOML file, so
//! visual tuning never requires recompiling:
//!
//! ```toml
//! [layout]
//! node_spacing = 12.0
//! tree_spacing = 40.0
//!
//! [svg]
//! viewbox_padding = 16.0
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::LayoutConfig;
use crate::renderer::SvgConfig;

/// Errors that can occur when loading or parsing style files
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("failed to read style file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse style TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Layout and rendering options loadable from a TOML file.
///
/// Missing sections and keys fall back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub layout: LayoutConfig,
    pub svg: SvgConfig,
}

impl StyleConfig {
    /// Load a style file from disk
    pub fn from_file(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Parse a style file from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
