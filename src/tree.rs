//! Error-tree enumeration over an expanded search
//!
//! One traversal enumerates every backtracking branch an expanded search
//! permits and computes subtree widths for collision-free horizontal layout.
//! Callers observe the traversal through a [`Visitor`]; running the same
//! enumeration twice yields the same event sequence, which the layout engine
//! relies on for its measure-then-emit passes.

use crate::scheme::Search;

/// Edit operation labelling the edge into a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Match,
    Substitution,
    Insertion,
    Deletion,
}

/// One enumerated node, delivered to a [`Visitor`] during traversal.
///
/// Nodes have no persistent identity; they exist only as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeNode {
    /// Column in layout units, unique within the siblings' subtree spans
    pub x: usize,
    /// Rows below the root; a deletion stays on its parent's row
    pub depth: usize,
    /// Errors accumulated on the path from the root, this edge included
    pub errors: usize,
    pub op: EditOp,
}

/// Receives node events during one pre-order traversal.
///
/// `enter` fires before the node's subtree is enumerated and `leave` after,
/// so the pair brackets the subtree and a visitor can maintain a path stack.
/// The root is not delivered; it corresponds to the traversal's start state.
pub trait Visitor {
    fn enter(&mut self, node: &TreeNode);

    fn leave(&mut self, _node: &TreeNode) {}
}

/// Enumerate the backtracking tree of an expanded search.
///
/// `sigma` is the alphabet size; with `allow_indels` the traversal also
/// produces insertion and deletion branches. Returns the width of the root's
/// subtree in layout units.
///
/// The search must already be validated and expanded. A non-terminal node
/// with no legal outgoing edge means the bounds are inconsistent; that is an
/// internal invariant violation and panics rather than producing a malformed
/// tree.
pub fn enumerate<V: Visitor>(
    search: &Search,
    sigma: usize,
    allow_indels: bool,
    visitor: &mut V,
) -> usize {
    visit(search, 0, 0, 0, sigma, allow_indels, visitor)
}

fn visit<V: Visitor>(
    search: &Search,
    x: usize,
    pos: usize,
    errors: usize,
    sigma: usize,
    allow_indels: bool,
    visitor: &mut V,
) -> usize {
    if pos == search.len() {
        return 1;
    }

    let mut width = 0;

    // match, cost 0; occupies the leftmost slot
    if search.lower[pos] <= errors {
        let node = TreeNode {
            x,
            depth: pos + 1,
            errors,
            op: EditOp::Match,
        };
        visitor.enter(&node);
        width += visit(search, x, pos + 1, errors, sigma, allow_indels, visitor);
        visitor.leave(&node);
    }

    if errors + 1 <= search.upper[pos] {
        // substitutions, one per non-matching symbol
        for _ in 1..sigma {
            let node = TreeNode {
                x: x + width,
                depth: pos + 1,
                errors: errors + 1,
                op: EditOp::Substitution,
            };
            visitor.enter(&node);
            width += visit(
                search,
                x + width,
                pos + 1,
                errors + 1,
                sigma,
                allow_indels,
                visitor,
            );
            visitor.leave(&node);
        }

        if allow_indels {
            let node = TreeNode {
                x: x + width,
                depth: pos + 1,
                errors: errors + 1,
                op: EditOp::Insertion,
            };
            visitor.enter(&node);
            width += visit(
                search,
                x + width,
                pos + 1,
                errors + 1,
                sigma,
                allow_indels,
                visitor,
            );
            visitor.leave(&node);

            // deletions do not advance the position; the error cap bounds
            // the recursion
            for _ in 1..sigma {
                let node = TreeNode {
                    x: x + width,
                    depth: pos,
                    errors: errors + 1,
                    op: EditOp::Deletion,
                };
                visitor.enter(&node);
                width += visit(
                    search,
                    x + width,
                    pos,
                    errors + 1,
                    sigma,
                    allow_indels,
                    visitor,
                );
                visitor.leave(&node);
            }
        }
    }

    assert!(
        width > 0,
        "no legal edge at position {pos} with {errors} errors; the search bounds are inconsistent"
    );
    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Record {
        events: Vec<(usize, usize, EditOp)>,
    }

    impl Visitor for Record {
        fn enter(&mut self, node: &TreeNode) {
            self.events.push((node.x, node.depth, node.op));
        }
    }

    #[derive(Default)]
    struct CountLeaves {
        len: usize,
        leaves: usize,
    }

    impl Visitor for CountLeaves {
        fn enter(&mut self, node: &TreeNode) {
            if node.depth == self.len {
                self.leaves += 1;
            }
        }
    }

    fn example_search() -> Search {
        Search::new(vec![0, 1], vec![0, 0], vec![0, 1])
    }

    #[test]
    fn test_example_node_count() {
        // order 01, lower 00, upper 01, sigma 4: a single match branch at
        // position 0, then a match and three substitutions at position 1
        let mut record = Record::default();
        enumerate(&example_search(), 4, false, &mut record);
        assert_eq!(record.events.len(), 5);

        let matches = record
            .events
            .iter()
            .filter(|(_, _, op)| *op == EditOp::Match)
            .count();
        let substitutions = record
            .events
            .iter()
            .filter(|(_, _, op)| *op == EditOp::Substitution)
            .count();
        assert_eq!(matches, 2);
        assert_eq!(substitutions, 3);
    }

    #[test]
    fn test_width_equals_leaf_count() {
        let searches = [
            example_search(),
            Search::new(vec![0, 1, 2], vec![0, 0, 0], vec![0, 2, 2]),
            Search::new(vec![0, 1, 2, 3], vec![0; 4], vec![1, 1, 2, 2]),
        ];
        for search in &searches {
            for allow_indels in [false, true] {
                let mut counter = CountLeaves {
                    len: search.len(),
                    leaves: 0,
                };
                let width = enumerate(search, 4, allow_indels, &mut counter);
                assert_eq!(width, counter.leaves, "search {search:?}");
            }
        }
    }

    #[test]
    fn test_deterministic_event_sequence() {
        let search = Search::new(vec![0, 1, 2], vec![0, 0, 0], vec![1, 1, 2]);
        let mut first = Record::default();
        let mut second = Record::default();
        enumerate(&search, 4, true, &mut first);
        enumerate(&search, 4, true, &mut second);
        assert_eq!(first.events, second.events);
    }

    #[test]
    fn test_no_indels_without_flag() {
        let search = Search::new(vec![0, 1, 2], vec![0, 0, 0], vec![1, 2, 2]);
        let mut record = Record::default();
        enumerate(&search, 4, false, &mut record);
        assert!(record
            .events
            .iter()
            .all(|(_, _, op)| matches!(op, EditOp::Match | EditOp::Substitution)));
    }

    #[test]
    fn test_deletion_stays_on_parent_row() {
        struct CheckRows {
            stack: Vec<usize>,
        }

        impl Visitor for CheckRows {
            fn enter(&mut self, node: &TreeNode) {
                let parent_depth = *self.stack.last().unwrap();
                match node.op {
                    EditOp::Deletion => assert_eq!(node.depth, parent_depth),
                    _ => assert_eq!(node.depth, parent_depth + 1),
                }
                self.stack.push(node.depth);
            }

            fn leave(&mut self, _node: &TreeNode) {
                self.stack.pop();
            }
        }

        let search = Search::new(vec![0, 1], vec![0, 0], vec![1, 2]);
        let mut check = CheckRows { stack: vec![0] };
        enumerate(&search, 4, true, &mut check);
        assert_eq!(check.stack, vec![0]);
    }

    #[test]
    fn test_sibling_offsets_are_cumulative() {
        // each sibling's column equals the parent column plus the widths of
        // the siblings placed before it, so columns never collide
        struct CheckColumns {
            stack: Vec<(usize, usize)>, // (node x, next free offset)
        }

        impl Visitor for CheckColumns {
            fn enter(&mut self, node: &TreeNode) {
                let &(parent_x, used) = self.stack.last().unwrap();
                assert_eq!(node.x, parent_x + used);
                self.stack.push((node.x, 0));
            }

            fn leave(&mut self, _node: &TreeNode) {
                let (_, width) = self.stack.pop().unwrap();
                let (_, used) = self.stack.last_mut().unwrap();
                *used += width.max(1);
            }
        }

        let search = Search::new(vec![0, 1, 2], vec![0, 0, 0], vec![1, 2, 2]);
        let mut check = CheckColumns {
            stack: vec![(0, 0)],
        };
        enumerate(&search, 4, false, &mut check);
    }

    #[test]
    #[should_panic(expected = "no legal edge")]
    fn test_inconsistent_bounds_panic() {
        // lower > upper slipped past validation: no edge is legal at the root
        let search = Search::new(vec![0], vec![1], vec![0]);
        enumerate(&search, 4, false, &mut Record::default());
    }
}
