//! Search scheme data model
//!
//! A [`Search`] is one backtracking strategy: a block traversal order `pi`
//! plus cumulative lower/upper error bounds per traversal step. A [`Scheme`]
//! is an ordered set of searches that together cover an error budget.

use std::fmt;

pub mod expand;
pub mod generator;
pub mod metrics;
pub mod properties;

pub use expand::{expand, expand_scheme, limit_to_hamming, partition};
pub use generator::{generate, generator_names};
pub use metrics::{node_count, weighted_node_count};
pub use properties::{is_complete, is_non_redundant, is_valid, validate_search};

/// One backtracking strategy over a block-partitioned sequence.
///
/// `pi` must be a contiguous permutation of `0..block_count` that includes
/// block 0; `lower` and `upper` are monotonically non-decreasing with
/// `lower[i] <= upper[i]`. The same type describes both block-level searches
/// and searches expanded over every symbol position (see [`expand`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    /// Traversal order over blocks (or symbol positions once expanded)
    pub pi: Vec<usize>,
    /// Minimum accumulated errors after each traversal step
    pub lower: Vec<usize>,
    /// Maximum accumulated errors after each traversal step
    pub upper: Vec<usize>,
}

impl Search {
    pub fn new(pi: Vec<usize>, lower: Vec<usize>, upper: Vec<usize>) -> Self {
        Self { pi, lower, upper }
    }

    /// Number of blocks (or positions, for an expanded search)
    pub fn block_count(&self) -> usize {
        self.pi.len()
    }

    /// Number of traversal steps
    pub fn len(&self) -> usize {
        self.pi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pi.is_empty()
    }

    /// Errors this search requires in total
    pub fn min_errors(&self) -> usize {
        self.lower.last().copied().unwrap_or(0)
    }

    /// Errors this search tolerates in total
    pub fn max_errors(&self) -> usize {
        self.upper.last().copied().unwrap_or(0)
    }
}

/// An ordered set of searches sharing one block count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scheme {
    pub searches: Vec<Search>,
}

impl Scheme {
    pub fn new(searches: Vec<Search>) -> Self {
        Self { searches }
    }

    pub fn len(&self) -> usize {
        self.searches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.searches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Search> {
        self.searches.iter()
    }

    /// Block count shared by all searches, or `None` for an empty scheme
    pub fn block_count(&self) -> Option<usize> {
        self.searches.first().map(Search::block_count)
    }

    /// Smallest total error count any search accepts
    pub fn min_errors(&self) -> usize {
        self.iter().map(Search::min_errors).min().unwrap_or(0)
    }

    /// Largest total error count any search accepts
    pub fn max_errors(&self) -> usize {
        self.iter().map(Search::max_errors).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a Scheme {
    type Item = &'a Search;
    type IntoIter = std::slice::Iter<'a, Search>;

    fn into_iter(self) -> Self::IntoIter {
        self.searches.iter()
    }
}

/// Serializes to the textual descriptor format the parser reads back:
/// a comment header and one `pi lower upper` digit triple per line.
impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# pi    L    U")?;
        for search in &self.searches {
            for &b in &search.pi {
                write!(f, "{b}")?;
            }
            write!(f, " ")?;
            for &l in &search.lower {
                write!(f, "{l}")?;
            }
            write!(f, " ")?;
            for &u in &search.upper {
                write!(f, "{u}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
