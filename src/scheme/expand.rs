//! Expansion of block-level searches to per-symbol positions
//!
//! A scheme describes error bounds at block granularity. Before enumeration
//! the target sequence length is partitioned across the blocks and every
//! search is re-indexed over individual symbol positions, so that the tree
//! enumerator advances one symbol per step.

use super::{Scheme, Search};
use crate::error::SchemeError;

/// Split `sequence_length` into `block_count` nearly equal parts.
///
/// The first `sequence_length % block_count` blocks, in block-index order,
/// receive one extra symbol. The parts always sum to `sequence_length`.
pub fn partition(sequence_length: usize, block_count: usize) -> Vec<usize> {
    assert!(block_count > 0, "partition requires at least one block");
    let base = sequence_length / block_count;
    let remainder = sequence_length % block_count;
    (0..block_count)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

/// Re-index a block-level search over every symbol position of a target of
/// length `sequence_length`.
///
/// Within one traversal step the upper bound holds for every position of the
/// block, while the lower bound of the step applies only at the block's last
/// position; earlier positions keep the previous step's lower bound. The
/// expanded `pi` lists the symbol positions block by block, ascending when
/// the traversal window grows to the right and descending when it grows to
/// the left, so it stays a contiguous permutation.
///
/// Returns `None` when the sequence is shorter than the block count or the
/// order is not contiguous.
pub fn expand(search: &Search, sequence_length: usize) -> Option<Search> {
    let blocks = search.block_count();
    if blocks == 0 || sequence_length < blocks {
        return None;
    }

    let part = partition(sequence_length, blocks);
    let starts: Vec<usize> = part
        .iter()
        .scan(0, |acc, &len| {
            let start = *acc;
            *acc += len;
            Some(start)
        })
        .collect();

    let mut pi = Vec::with_capacity(sequence_length);
    let mut lower = Vec::with_capacity(sequence_length);
    let mut upper = Vec::with_capacity(sequence_length);

    let (mut lo, mut hi) = (search.pi[0], search.pi[0]);
    let mut prev_lower = 0;
    for (step, &block) in search.pi.iter().enumerate() {
        let positions = starts[block]..starts[block] + part[block];
        if step == 0 {
            pi.extend(positions);
        } else if block == hi + 1 {
            pi.extend(positions);
            hi = block;
        } else if block + 1 == lo {
            pi.extend(positions.rev());
            lo = block;
        } else {
            return None;
        }

        for _ in 0..part[block] {
            lower.push(prev_lower);
            upper.push(search.upper[step]);
        }
        if let Some(last) = lower.last_mut() {
            *last = search.lower[step];
        }
        prev_lower = search.lower[step];
    }

    Some(Search::new(pi, lower, upper))
}

/// Restrict an expanded search to substitution-only semantics.
///
/// Without insertions and deletions no more than one error per consumed
/// position is reachable, so both bounds are clamped to `position + 1`.
pub fn limit_to_hamming(mut search: Search) -> Search {
    for (i, u) in search.upper.iter_mut().enumerate() {
        *u = (*u).min(i + 1);
    }
    for (i, l) in search.lower.iter_mut().enumerate() {
        *l = (*l).min(i + 1);
    }
    search
}

/// Expand every search of a scheme, applying the Hamming clamp unless
/// `edit_distance` is set.
pub fn expand_scheme(
    scheme: &Scheme,
    sequence_length: usize,
    edit_distance: bool,
) -> Result<Vec<Search>, SchemeError> {
    scheme
        .iter()
        .map(|search| {
            let expanded = expand(search, sequence_length).ok_or(SchemeError::SequenceTooShort {
                sequence_length,
                block_count: search.block_count(),
            })?;
            Ok(if edit_distance {
                expanded
            } else {
                limit_to_hamming(expanded)
            })
        })
        .collect()
}
