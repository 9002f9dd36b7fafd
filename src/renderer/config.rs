//! Configuration for SVG rendering

use serde::Deserialize;

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    /// Padding around the viewBox
    pub viewbox_padding: f64,

    /// Font size for block labels, in pixels
    pub font_size: f64,

    /// Whether to emit the glow filter definition used for node highlighting
    pub glow_filter: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewbox_padding: 10.0,
            font_size: 6.0,
            glow_filter: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewBox padding
    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    /// Set the label font size
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Enable or disable the glow filter definition
    pub fn with_glow_filter(mut self, enabled: bool) -> Self {
        self.glow_filter = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert_eq!(config.viewbox_padding, 10.0);
        assert_eq!(config.font_size, 6.0);
        assert!(config.glow_filter);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_viewbox_padding(20.0)
            .with_font_size(8.0)
            .with_glow_filter(false);

        assert_eq!(config.viewbox_padding, 20.0);
        assert_eq!(config.font_size, 8.0);
        assert!(!config.glow_filter);
    }
}
