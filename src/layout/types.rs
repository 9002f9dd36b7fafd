//! Core types produced by the layout engine

use crate::tree::EditOp;

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A bounding box representing the spatial extent of a tree or scheme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Compute the union of two bounding boxes (smallest box containing both)
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(x, y, right - x, bottom - y)
    }

    /// Expand this bounding box to include a point
    pub fn expand_to_include(&self, point: Point) -> BoundingBox {
        let x = self.x.min(point.x);
        let y = self.y.min(point.y);
        let right = self.right().max(point.x);
        let bottom = self.bottom().max(point.y);
        BoundingBox::new(x, y, right - x, bottom - y)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

/// A node circle, addressable from scripts via its `name` and selectable
/// through the ancestry classes of its subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMark {
    pub at: Point,
    pub radius: f64,
    /// Stable id of the form `node-{tree}-{x}-{y}` in tree-local coordinates
    pub name: String,
    /// One `child-of-…` class per ancestor on the path from the root
    pub classes: Vec<String>,
}

/// An edge from a node to its parent, styled by the edit operation.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMark {
    pub from: Point,
    pub to: Point,
    pub op: EditOp,
    pub classes: Vec<String>,
}

/// A horizontal line separating two block bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatorMark {
    pub from: Point,
    pub to: Point,
}

/// A block identity label, centered on its band.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMark {
    pub at: Point,
    pub text: String,
}

/// All marks of one positioned tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout {
    pub bounds: BoundingBox,
    pub nodes: Vec<NodeMark>,
    pub edges: Vec<EdgeMark>,
    pub separators: Vec<SeparatorMark>,
    pub labels: Vec<LabelMark>,
}

/// A whole scheme laid out as a forest, trees side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeLayout {
    pub trees: Vec<TreeLayout>,
    pub bounds: BoundingBox,
}

/// Format a coordinate without a trailing `.0` for whole values.
pub(crate) fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
