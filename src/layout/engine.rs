//! Two-pass coordinate layout over the tree enumerator
//!
//! Every tree is enumerated twice: a measurement pass finds its bounding
//! box, then an emission pass walks the identical event sequence with a path
//! stack and produces positioned marks. The enumerator is deterministic, so
//! the two passes always agree.

use super::config::LayoutConfig;
use super::error::LayoutError;
use super::types::{
    fmt_num, BoundingBox, EdgeMark, LabelMark, NodeMark, Point, SchemeLayout, SeparatorMark,
    TreeLayout,
};
use crate::scheme::{expand_scheme, partition, validate_search, Scheme};
use crate::tree::{enumerate, EditOp, TreeNode, Visitor};

/// Measurement pass: largest scaled coordinates over all visited nodes.
struct Measure {
    unit: f64,
    max_x: f64,
    max_y: f64,
}

impl Visitor for Measure {
    fn enter(&mut self, node: &TreeNode) {
        self.max_x = self.max_x.max(node.x as f64 * self.unit);
        self.max_y = self.max_y.max(node.depth as f64 * self.unit);
    }
}

struct PathEntry {
    at: Point,
    name: String,
}

/// Emission pass: turns node events into edge and circle marks, tracking the
/// path from the root so every mark carries its ancestry classes.
struct Emit {
    unit: f64,
    radius: f64,
    origin: Point,
    tree_index: usize,
    path: Vec<PathEntry>,
    nodes: Vec<NodeMark>,
    edges: Vec<EdgeMark>,
}

impl Visitor for Emit {
    fn enter(&mut self, node: &TreeNode) {
        let parent = self
            .path
            .last()
            .expect("path stack always holds the root")
            .at;

        let local_x = node.x as f64 * self.unit;
        let mut local_y = node.depth as f64 * self.unit;
        if node.op == EditOp::Deletion {
            // sub-unit nudge off the parent's row
            local_y += 1.0;
        }
        let at = Point::new(self.origin.x + local_x, self.origin.y + local_y);
        let name = format!(
            "node-{}-{}-{}",
            self.tree_index,
            fmt_num(local_x),
            fmt_num(local_y)
        );
        let classes: Vec<String> = self
            .path
            .iter()
            .map(|entry| format!("child-of-{}", entry.name))
            .collect();

        self.edges.push(EdgeMark {
            from: parent,
            to: at,
            op: node.op,
            classes: classes.clone(),
        });
        self.nodes.push(NodeMark {
            at,
            radius: self.radius,
            name: name.clone(),
            classes,
        });
        self.path.push(PathEntry { at, name });
    }

    fn leave(&mut self, _node: &TreeNode) {
        self.path.pop();
    }
}

/// Lay out every tree of a scheme side by side.
///
/// Each search is validated, expanded against `sequence_length`, clamped to
/// Hamming semantics unless `edit_distance` is set, and enumerated twice.
/// The scheme's width is the sum of the tree widths plus one gap between
/// neighbours; its height is the tallest tree.
pub fn layout_scheme(
    scheme: &Scheme,
    sequence_length: usize,
    sigma: usize,
    edit_distance: bool,
    config: &LayoutConfig,
) -> Result<SchemeLayout, LayoutError> {
    for (index, search) in scheme.iter().enumerate() {
        validate_search(search).map_err(|reason| LayoutError::InvalidSearch { index, reason })?;
    }
    let expanded = expand_scheme(scheme, sequence_length, edit_distance)?;

    let unit = config.node_spacing;
    let mut trees = Vec::with_capacity(expanded.len());
    let mut origin_x = 0.0;

    for (index, (search, original)) in expanded.iter().zip(scheme.iter()).enumerate() {
        let tree_index = index + 1;
        let origin = Point::new(origin_x, 0.0);

        let mut measure = Measure {
            unit,
            max_x: 0.0,
            max_y: 0.0,
        };
        enumerate(search, sigma, edit_distance, &mut measure);

        let root_name = format!("node-{tree_index}-0-0");
        let mut emit = Emit {
            unit,
            radius: config.node_radius,
            origin,
            tree_index,
            path: vec![PathEntry {
                at: origin,
                name: root_name.clone(),
            }],
            nodes: vec![NodeMark {
                at: origin,
                radius: config.node_radius,
                name: root_name,
                classes: vec![],
            }],
            edges: vec![],
        };
        enumerate(search, sigma, edit_distance, &mut emit);

        // block bands, accumulated in traversal order
        let part = partition(sequence_length, original.block_count());
        let mut separators = Vec::new();
        let mut labels = Vec::new();
        let mut consumed = 0;
        for (step, &block) in original.pi.iter().enumerate() {
            let band_top = consumed as f64 * unit;
            consumed += part[block];
            let band_bottom = consumed as f64 * unit;
            labels.push(LabelMark {
                at: Point::new(
                    origin.x - config.label_offset,
                    origin.y + (band_top + band_bottom) / 2.0,
                ),
                text: format!("P{block}"),
            });
            if step + 1 != original.block_count() {
                separators.push(SeparatorMark {
                    from: Point::new(origin.x - config.separator_overhang, origin.y + band_bottom),
                    to: Point::new(
                        origin.x + measure.max_x + config.separator_overhang,
                        origin.y + band_bottom,
                    ),
                });
            }
        }

        let mut bounds = BoundingBox::new(origin.x, origin.y, 0.0, 0.0);
        for node in &emit.nodes {
            bounds = bounds.expand_to_include(node.at);
        }
        for label in &labels {
            bounds = bounds.expand_to_include(label.at);
        }
        for separator in &separators {
            bounds = bounds
                .expand_to_include(separator.from)
                .expand_to_include(separator.to);
        }

        trees.push(TreeLayout {
            bounds,
            nodes: emit.nodes,
            edges: emit.edges,
            separators,
            labels,
        });
        origin_x += measure.max_x + config.tree_spacing;
    }

    let bounds = trees
        .iter()
        .map(|tree| tree.bounds)
        .reduce(|a, b| a.union(&b))
        .unwrap_or_default();
    Ok(SchemeLayout { trees, bounds })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn kianfar_one() -> Scheme {
        parse("01 00 01\n10 01 11\n").unwrap()
    }

    #[test]
    fn test_trees_are_placed_side_by_side() {
        let config = LayoutConfig::default();
        let layout = layout_scheme(&kianfar_one(), 4, 4, false, &config).unwrap();
        assert_eq!(layout.trees.len(), 2);

        let first = &layout.trees[0];
        let second = &layout.trees[1];
        let first_width = first.nodes.iter().map(|n| n.at.x).fold(0.0, f64::max);
        // the second tree starts one gap after the first tree's widest node
        let second_min = second
            .nodes
            .iter()
            .map(|n| n.at.x)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(second_min, first_width + config.tree_spacing);
    }

    #[test]
    fn test_separators_and_labels_per_tree() {
        let scheme = parse("012 000 022").unwrap();
        let layout = layout_scheme(&scheme, 10, 4, false, &LayoutConfig::default()).unwrap();
        let tree = &layout.trees[0];
        assert_eq!(tree.labels.len(), 3);
        assert_eq!(tree.separators.len(), 2);
        assert_eq!(tree.labels[0].text, "P0");
        // partition of 10 over 3 blocks is [4, 3, 3]; the first band ends
        // after 4 symbols
        assert_eq!(tree.separators[0].from.y, 40.0);
        assert_eq!(tree.separators[1].from.y, 70.0);
        // first label is centered on the first band
        assert_eq!(tree.labels[0].at.y, 20.0);
    }

    #[test]
    fn test_bands_follow_traversal_order() {
        let scheme = parse("120 000 022").unwrap();
        let layout = layout_scheme(&scheme, 10, 4, false, &LayoutConfig::default()).unwrap();
        let tree = &layout.trees[0];
        assert_eq!(tree.labels[0].text, "P1");
        assert_eq!(tree.labels[2].text, "P0");
        // traversal starts at block 1 of length 3
        assert_eq!(tree.separators[0].from.y, 30.0);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let scheme = kianfar_one();
        let config = LayoutConfig::default();
        let a = layout_scheme(&scheme, 6, 4, true, &config).unwrap();
        let b = layout_scheme(&scheme, 6, 4, true, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_root_mark_and_edge_counts() {
        let scheme = parse("01 00 01").unwrap();
        let layout = layout_scheme(&scheme, 2, 4, false, &LayoutConfig::default()).unwrap();
        let tree = &layout.trees[0];
        // five enumerated nodes plus the explicit root mark
        assert_eq!(tree.nodes.len(), 6);
        assert_eq!(tree.edges.len(), 5);
        assert_eq!(tree.nodes[0].name, "node-1-0-0");
        assert!(tree.nodes[0].classes.is_empty());
    }

    #[test]
    fn test_deletion_marks_are_nudged() {
        let scheme = parse("01 00 02").unwrap();
        let layout = layout_scheme(&scheme, 2, 4, true, &LayoutConfig::default()).unwrap();
        let tree = &layout.trees[0];
        let deletions: Vec<_> = tree
            .edges
            .iter()
            .filter(|e| e.op == crate::tree::EditOp::Deletion)
            .collect();
        assert!(!deletions.is_empty());
        for edge in deletions {
            // one unit below a row multiple
            assert_eq!(edge.to.y.rem_euclid(10.0), 1.0);
        }
    }

    #[test]
    fn test_invalid_search_is_rejected() {
        let scheme = Scheme::new(vec![crate::scheme::Search::new(
            vec![0, 2],
            vec![0, 0],
            vec![0, 1],
        )]);
        let err = layout_scheme(&scheme, 4, 4, false, &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidSearch { index: 0, .. }));
    }

    #[test]
    fn test_sequence_too_short_is_rejected() {
        let scheme = parse("012 000 012").unwrap();
        let err = layout_scheme(&scheme, 2, 4, false, &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, LayoutError::Scheme(_)));
    }

    #[test]
    fn test_empty_scheme_yields_empty_layout() {
        let layout =
            layout_scheme(&Scheme::default(), 10, 4, false, &LayoutConfig::default()).unwrap();
        assert!(layout.trees.is_empty());
        assert_eq!(layout.bounds, BoundingBox::zero());
    }
}
