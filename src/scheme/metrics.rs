//! Tree size metrics over an expanded scheme
//!
//! Both metrics are alternate consumers of the tree enumerator, differing
//! only in the visitor: a plain node count for tree size, and a weighted
//! count that models the work an index-backed search would actually do.

use super::{expand_scheme, Scheme};
use crate::error::SchemeError;
use crate::tree::{enumerate, EditOp, TreeNode, Visitor};

#[derive(Default)]
struct CountNodes {
    nodes: usize,
}

impl Visitor for CountNodes {
    fn enter(&mut self, _node: &TreeNode) {
        self.nodes += 1;
    }
}

/// Total number of enumerated tree nodes across the expanded scheme,
/// roots included.
pub fn node_count(
    scheme: &Scheme,
    sequence_length: usize,
    sigma: usize,
    edit_distance: bool,
) -> Result<usize, SchemeError> {
    let expanded = expand_scheme(scheme, sequence_length, edit_distance)?;
    let mut counter = CountNodes::default();
    for search in &expanded {
        enumerate(search, sigma, edit_distance, &mut counter);
    }
    Ok(counter.nodes + expanded.len())
}

struct WeightNodes {
    sigma: f64,
    text_length: f64,
    /// Target symbols consumed on the current path; insertions consume a
    /// pattern position only
    depth: i32,
    total: f64,
}

impl Visitor for WeightNodes {
    fn enter(&mut self, node: &TreeNode) {
        if node.op != EditOp::Insertion {
            self.depth += 1;
        }
        self.total += (self.text_length / self.sigma.powi(self.depth)).min(1.0);
    }

    fn leave(&mut self, node: &TreeNode) {
        if node.op != EditOp::Insertion {
            self.depth -= 1;
        }
    }
}

/// Node count weighted by the expected number of occurrences, in a random
/// text of `text_length` symbols, of the target prefix a node represents:
/// `min(1, text_length / sigma^depth)`. Roots weigh one each.
pub fn weighted_node_count(
    scheme: &Scheme,
    sequence_length: usize,
    sigma: usize,
    edit_distance: bool,
    text_length: f64,
) -> Result<f64, SchemeError> {
    let expanded = expand_scheme(scheme, sequence_length, edit_distance)?;
    let mut weigher = WeightNodes {
        sigma: sigma as f64,
        text_length,
        depth: 0,
        total: 0.0,
    };
    for search in &expanded {
        enumerate(search, sigma, edit_distance, &mut weigher);
    }
    Ok(weigher.total + expanded.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_node_count_example() {
        // five enumerated nodes plus the root
        let scheme = parse("01 00 01").unwrap();
        assert_eq!(node_count(&scheme, 2, 4, false).unwrap(), 6);
    }

    #[test]
    fn test_node_count_rejects_short_sequence() {
        let scheme = parse("012 000 012").unwrap();
        assert_eq!(
            node_count(&scheme, 2, 4, false),
            Err(SchemeError::SequenceTooShort {
                sequence_length: 2,
                block_count: 3,
            })
        );
    }

    #[test]
    fn test_edit_distance_enumerates_more_nodes() {
        let scheme = parse("01 00 02").unwrap();
        let hamming = node_count(&scheme, 4, 4, false).unwrap();
        let edit = node_count(&scheme, 4, 4, true).unwrap();
        assert!(edit > hamming);
    }

    #[test]
    fn test_weighted_count_saturates_for_huge_texts() {
        // with a text length far above sigma^depth every weight is one, so
        // the weighted count equals the plain count
        let scheme = parse("01 00 01").unwrap();
        let count = node_count(&scheme, 2, 4, false).unwrap();
        let weighted = weighted_node_count(&scheme, 2, 4, false, 1e9).unwrap();
        assert_eq!(weighted, count as f64);
    }

    #[test]
    fn test_weighted_count_discounts_deep_nodes() {
        let scheme = parse("01 00 01").unwrap();
        let count = node_count(&scheme, 8, 4, false).unwrap();
        let weighted = weighted_node_count(&scheme, 8, 4, false, 4.0).unwrap();
        assert!(weighted < count as f64);
        assert!(weighted >= scheme.len() as f64);
    }
}
