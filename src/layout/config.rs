//! Configuration for the layout engine

use serde::Deserialize;

/// Spacing options for tree layout, in user units.
///
/// All distances that were free-standing constants in earlier sketches live
/// here so callers can override them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance between adjacent node rows and columns
    pub node_spacing: f64,

    /// Horizontal gap between adjacent trees
    pub tree_spacing: f64,

    /// Radius of node circles
    pub node_radius: f64,

    /// How far block separator lines extend past a tree on either side
    pub separator_overhang: f64,

    /// Horizontal distance of block labels from a tree's left edge
    pub label_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_spacing: 10.0,
            tree_spacing: 30.0,
            node_radius: 3.0,
            separator_overhang: 5.0,
            label_offset: 10.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the distance between adjacent node rows and columns
    pub fn with_node_spacing(mut self, spacing: f64) -> Self {
        self.node_spacing = spacing;
        self
    }

    /// Set the gap between adjacent trees
    pub fn with_tree_spacing(mut self, spacing: f64) -> Self {
        self.tree_spacing = spacing;
        self
    }

    /// Set the node circle radius
    pub fn with_node_radius(mut self, radius: f64) -> Self {
        self.node_radius = radius;
        self
    }
}
