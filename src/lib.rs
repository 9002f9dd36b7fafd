//! Search scheme visualizer
//!
//! Parses search schemes for approximate string matching, enumerates the
//! backtracking tree each search would explore against a target sequence,
//! lays the trees out as a forest, and renders them as SVG.
//!
//! # Example
//!
//! ```rust
//! let svg = scheme_viz::render("01 00 01\n10 01 11\n").unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod error;
pub mod layout;
pub mod parser;
pub mod renderer;
pub mod scheme;
pub mod style;
pub mod tree;

pub use error::SchemeError;
pub use layout::{layout_scheme, LayoutConfig, LayoutError, SchemeLayout};
pub use parser::parse;
pub use renderer::{render_svg, SvgConfig};
pub use scheme::{Scheme, Search};
pub use style::StyleConfig;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while parsing the scheme descriptor
    #[error("parse error: {0}")]
    Parse(#[from] SchemeError),

    /// Error while computing the layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Target sequence length the scheme is expanded to
    pub sequence_length: usize,
    /// Alphabet size
    pub sigma: usize,
    /// Enumerate insertions and deletions as well as substitutions
    pub edit_distance: bool,
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sequence_length: 10,
            sigma: 4,
            edit_distance: false,
            layout: LayoutConfig::default(),
            svg: SvgConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target sequence length
    pub fn with_sequence_length(mut self, length: usize) -> Self {
        self.sequence_length = length;
        self
    }

    /// Set the alphabet size
    pub fn with_sigma(mut self, sigma: usize) -> Self {
        self.sigma = sigma;
        self
    }

    /// Enable or disable insertion/deletion branches
    pub fn with_edit_distance(mut self, edit_distance: bool) -> Self {
        self.edit_distance = edit_distance;
        self
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, svg: SvgConfig) -> Self {
        self.svg = svg;
        self
    }
}

/// Render a scheme descriptor to SVG with default configuration.
///
/// This is the main entry point for the library: it parses the source,
/// computes the layout, and generates SVG output.
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a scheme descriptor to SVG with custom configuration.
///
/// # Example
///
/// ```rust
/// use scheme_viz::{render_with_config, LayoutConfig, RenderConfig};
///
/// let config = RenderConfig::new()
///     .with_sequence_length(6)
///     .with_layout(LayoutConfig::default().with_node_spacing(12.0));
///
/// let svg = render_with_config("012 000 022\n210 000 012\n", config).unwrap();
/// assert!(svg.contains("<circle"));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let scheme = parse(source)?;
    let layout = layout_scheme(
        &scheme,
        config.sequence_length,
        config.sigma,
        config.edit_distance,
        &config.layout,
    )?;
    Ok(render_svg(&layout, &config.svg))
}
