//! Canonical search scheme generators
//!
//! Well-known schemes from the literature, constructed by name for a given
//! error budget. Generated schemes serialize to the textual format via
//! [`Scheme`]'s `Display` impl, so they can be fed back through the parser.

use super::{Scheme, Search};
use crate::error::SchemeError;

/// Names accepted by [`generate`], in listing order.
pub fn generator_names() -> &'static [&'static str] {
    &["backtracking", "kianfar", "pigeon"]
}

/// Build the named scheme for `min_errors..=max_errors` total errors.
///
/// Block indices and bounds must stay single digits to remain serializable,
/// so budgets above 9 are rejected.
pub fn generate(name: &str, min_errors: usize, max_errors: usize) -> Result<Scheme, SchemeError> {
    if min_errors > max_errors || max_errors > 9 {
        return Err(SchemeError::UnsupportedBudget {
            generator: name.to_string(),
            min_errors,
            max_errors,
        });
    }
    match name {
        "backtracking" => Ok(backtracking(min_errors, max_errors)),
        "kianfar" => kianfar(min_errors, max_errors),
        "pigeon" => Ok(pigeon(min_errors, max_errors)),
        _ => Err(SchemeError::UnknownGenerator(name.to_string())),
    }
}

/// Plain backtracking: a single search over one block with the full budget.
fn backtracking(min_errors: usize, max_errors: usize) -> Scheme {
    Scheme::new(vec![Search::new(
        vec![0],
        vec![min_errors],
        vec![max_errors],
    )])
}

/// Pigeonhole principle: `max_errors + 1` blocks, one search per block that
/// matches its starting block exactly and spends the budget on the rest.
///
/// With at most `max_errors` errors over `max_errors + 1` blocks, some block
/// is error-free, so the search starting there admits the distribution.
fn pigeon(min_errors: usize, max_errors: usize) -> Scheme {
    let blocks = max_errors + 1;
    let searches = (0..blocks)
        .map(|start| {
            let pi: Vec<usize> = (start..blocks).chain((0..start).rev()).collect();
            let mut lower = vec![0; blocks];
            lower[blocks - 1] = min_errors;
            let mut upper = vec![max_errors; blocks];
            upper[0] = 0;
            Search::new(pi, lower, upper)
        })
        .collect();
    Scheme::new(searches)
}

/// Optimal schemes of Kianfar et al., published for budgets up to two
/// errors. The published bounds fix the whole `0..=max_errors` range, so
/// `min_errors` is not used.
fn kianfar(_min_errors: usize, max_errors: usize) -> Result<Scheme, SchemeError> {
    let searches = match max_errors {
        1 => vec![
            Search::new(vec![0, 1], vec![0, 0], vec![0, 1]),
            Search::new(vec![1, 0], vec![0, 1], vec![1, 1]),
        ],
        2 => vec![
            Search::new(vec![0, 1, 2], vec![0, 0, 2], vec![0, 1, 2]),
            Search::new(vec![2, 1, 0], vec![0, 0, 0], vec![0, 2, 2]),
            Search::new(vec![1, 2, 0], vec![0, 1, 1], vec![1, 2, 2]),
        ],
        _ => {
            return Err(SchemeError::UnsupportedBudget {
                generator: "kianfar".to_string(),
                min_errors: _min_errors,
                max_errors,
            })
        }
    };
    Ok(Scheme::new(searches))
}
