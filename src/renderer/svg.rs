//! SVG generation from scheme layouts

use crate::layout::types::fmt_num;
use crate::layout::{BoundingBox, Point, SchemeLayout};
use crate::tree::EditOp;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    defs: Vec<String>,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            defs: vec![],
            elements: vec![],
        }
    }

    /// Add the glow filter definition scripts can apply to highlighted nodes
    pub fn add_glow_filter(&mut self) {
        self.defs.push(
            r#"<filter id="glow" filterUnits="userSpaceOnUse" x="-50%" y="-50%" width="200%" height="200%">
  <feGaussianBlur in="SourceGraphic" stdDeviation="0.5" result="blur"/>
  <feMerge>
    <feMergeNode in="blur"/>
    <feMergeNode in="SourceGraphic"/>
  </feMerge>
</filter>"#
                .to_string(),
        );
    }

    /// Add a tree edge, dashed according to its edit operation
    pub fn add_edge(&mut self, from: Point, to: Point, op: EditOp, classes: &[String]) {
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, classes.join(" "))
        };
        let dash_attr = match dasharray(op) {
            Some(dash) => format!(r#" stroke-dasharray="{dash}""#),
            None => String::new(),
        };
        self.elements.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{} stroke="black"{}/>"#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            class_attr,
            dash_attr,
        ));
    }

    /// Add a block separator line
    pub fn add_separator(&mut self, from: Point, to: Point) {
        self.elements.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="0.5"/>"#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
        ));
    }

    /// Add a node circle carrying its name and ancestry classes
    pub fn add_node(&mut self, at: Point, radius: f64, name: &str, classes: &[String]) {
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" data-node-name="{}" class="{}"/>"#,
            fmt_num(at.x),
            fmt_num(at.y),
            fmt_num(radius),
            name,
            classes.join(" "),
        ));
    }

    /// Add a text label
    pub fn add_label(&mut self, at: Point, text: &str) {
        self.elements.push(format!(
            r#"<text x="{}" y="{}">{}</text>"#,
            fmt_num(at.x),
            fmt_num(at.y),
            text,
        ));
    }

    /// Assemble the document around `bounds`, padded on every side
    pub fn build(self, bounds: &BoundingBox) -> String {
        let pad = self.config.viewbox_padding;
        let mut out = format!(
            r#"<svg viewBox="{} {} {} {}" xmlns="http://www.w3.org/2000/svg">{}"#,
            fmt_num(bounds.x - pad),
            fmt_num(bounds.y - pad),
            fmt_num(bounds.width + 2.0 * pad),
            fmt_num(bounds.height + 2.0 * pad),
            "\n",
        );

        out.push_str(&format!(
            "<style type=\"text/css\">\n<![CDATA[\n  text {{\n    font-size: {}px;\n    text-anchor: start;\n    dominant-baseline: central;\n  }}\n]]>\n</style>\n",
            fmt_num(self.config.font_size),
        ));

        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            for def in &self.defs {
                out.push_str(def);
                out.push('\n');
            }
            out.push_str("</defs>\n");
        }

        for element in &self.elements {
            out.push_str(element);
            out.push('\n');
        }

        out.push_str("</svg>\n");
        out
    }
}

/// Dash pattern distinguishing error edges from plain matches
fn dasharray(op: EditOp) -> Option<&'static str> {
    match op {
        EditOp::Match => None,
        EditOp::Substitution => Some("2 1"),
        EditOp::Insertion | EditOp::Deletion => Some("1 2"),
    }
}

/// Serialize a laid-out scheme into an SVG document.
///
/// Per tree: block labels first, then separators, edges, and node circles,
/// so circles sit on top of the lines they connect.
pub fn render_svg(layout: &SchemeLayout, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    if config.glow_filter {
        builder.add_glow_filter();
    }
    for tree in &layout.trees {
        for label in &tree.labels {
            builder.add_label(label.at, &label.text);
        }
        for separator in &tree.separators {
            builder.add_separator(separator.from, separator.to);
        }
        for edge in &tree.edges {
            builder.add_edge(edge.from, edge.to, edge.op, &edge.classes);
        }
        for node in &tree.nodes {
            builder.add_node(node.at, node.radius, &node.name, &node.classes);
        }
    }
    builder.build(&layout.bounds)
}
