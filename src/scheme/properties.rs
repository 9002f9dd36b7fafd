//! Scheme-level correctness properties
//!
//! Structural validity of single searches, plus completeness and
//! non-redundancy of whole schemes over an error budget. The latter two are
//! decided by enumerating every distribution of errors across the blocks and
//! counting the searches that admit it.

use super::{Scheme, Search};

/// True if every prefix of `pi`, viewed as a set, is a contiguous run.
pub(crate) fn pi_is_contiguous(pi: &[usize]) -> bool {
    let Some((&first, rest)) = pi.split_first() else {
        return false;
    };
    let (mut lo, mut hi) = (first, first);
    for &block in rest {
        if block == hi + 1 {
            hi = block;
        } else if block + 1 == lo {
            lo = block;
        } else {
            return false;
        }
    }
    true
}

pub(crate) fn is_monotone(bounds: &[usize]) -> bool {
    bounds.windows(2).all(|w| w[0] <= w[1])
}

/// Structural checks for a single search.
///
/// A contiguous order containing block 0 is necessarily a permutation of
/// `0..block_count`, so no separate permutation check is needed.
pub fn validate_search(search: &Search) -> Result<(), String> {
    if search.pi.is_empty() {
        return Err("order is empty".to_string());
    }
    if search.pi.len() != search.lower.len() || search.lower.len() != search.upper.len() {
        return Err("order and bound arrays differ in length".to_string());
    }
    if !search.pi.contains(&0) {
        return Err("order does not include block 0".to_string());
    }
    if !pi_is_contiguous(&search.pi) {
        return Err("order violates the connectivity property".to_string());
    }
    if !is_monotone(&search.lower) {
        return Err("lower bounds are not monotonically non-decreasing".to_string());
    }
    if !is_monotone(&search.upper) {
        return Err("upper bounds are not monotonically non-decreasing".to_string());
    }
    for (step, (&l, &u)) in search.lower.iter().zip(&search.upper).enumerate() {
        if l > u {
            return Err(format!("lower bound exceeds upper bound at step {}", step + 1));
        }
    }
    Ok(())
}

/// True if every search is structurally valid and all share one block count.
pub fn is_valid(scheme: &Scheme) -> bool {
    let mut block_count = None;
    scheme.iter().all(|search| {
        validate_search(search).is_ok()
            && *block_count.get_or_insert(search.block_count()) == search.block_count()
    })
}

/// True if `search` admits the per-block error distribution `errors`.
///
/// The running error total, accumulated in traversal order, must stay within
/// the bounds at every step.
fn covers(search: &Search, errors: &[usize]) -> bool {
    let mut acc = 0;
    for (step, &block) in search.pi.iter().enumerate() {
        acc += errors[block];
        if acc < search.lower[step] || acc > search.upper[step] {
            return false;
        }
    }
    true
}

/// Call `f` with every way of distributing `total` errors over `blocks`.
fn for_each_distribution(blocks: usize, total: usize, f: &mut impl FnMut(&[usize])) {
    fn rec(buf: &mut Vec<usize>, remaining_blocks: usize, remaining: usize, f: &mut impl FnMut(&[usize])) {
        if remaining_blocks == 1 {
            buf.push(remaining);
            f(buf);
            buf.pop();
            return;
        }
        for e in 0..=remaining {
            buf.push(e);
            rec(buf, remaining_blocks - 1, remaining - e, f);
            buf.pop();
        }
    }
    if blocks == 0 {
        return;
    }
    rec(&mut Vec::with_capacity(blocks), blocks, total, f);
}

/// True if every error distribution with a total in `min_errors..=max_errors`
/// is admitted by at least one search.
pub fn is_complete(scheme: &Scheme, min_errors: usize, max_errors: usize) -> bool {
    let Some(blocks) = scheme.block_count() else {
        return false;
    };
    let mut complete = true;
    for total in min_errors..=max_errors {
        for_each_distribution(blocks, total, &mut |errors| {
            if !scheme.iter().any(|search| covers(search, errors)) {
                complete = false;
            }
        });
    }
    complete
}

/// True if no error distribution with a total in `min_errors..=max_errors`
/// is admitted by more than one search.
pub fn is_non_redundant(scheme: &Scheme, min_errors: usize, max_errors: usize) -> bool {
    let Some(blocks) = scheme.block_count() else {
        return true;
    };
    let mut non_redundant = true;
    for total in min_errors..=max_errors {
        for_each_distribution(blocks, total, &mut |errors| {
            let admitting = scheme.iter().filter(|search| covers(search, errors)).count();
            if admitting > 1 {
                non_redundant = false;
            }
        });
    }
    non_redundant
}
