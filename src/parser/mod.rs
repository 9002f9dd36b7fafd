//! Parser for the textual search scheme format
//!
//! One search per non-empty, non-comment line: three whitespace-separated,
//! equal-length digit tokens `order lower upper`. Lines starting with `#`
//! are comments.
//!
//! ```text
//! # pi    L    U
//! 012 000 022
//! 210 000 012
//! ```
//!
//! Every structural violation is rejected with the offending line number;
//! nothing is repaired silently.

use crate::error::SchemeError;
use crate::scheme::{properties, Scheme, Search};

/// Parse a scheme from its textual descriptor format.
pub fn parse(source: &str) -> Result<Scheme, SchemeError> {
    let mut searches: Vec<Search> = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = text.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(SchemeError::PartCount {
                line,
                found: parts.len(),
            });
        }
        if parts[0].len() != parts[1].len() || parts[1].len() != parts[2].len() {
            return Err(SchemeError::PartLengthMismatch { line });
        }

        let pi = digits(parts[0], line, "order")?;
        let lower = digits(parts[1], line, "lower")?;
        let upper = digits(parts[2], line, "upper")?;

        if !pi.contains(&0) {
            return Err(SchemeError::MissingBlockZero { line });
        }
        if !properties::pi_is_contiguous(&pi) {
            return Err(SchemeError::DisconnectedOrder { line });
        }
        if !properties::is_monotone(&lower) {
            return Err(SchemeError::NonMonotoneBounds {
                line,
                bound: "lower",
            });
        }
        if !properties::is_monotone(&upper) {
            return Err(SchemeError::NonMonotoneBounds {
                line,
                bound: "upper",
            });
        }
        for (step, (&l, &u)) in lower.iter().zip(&upper).enumerate() {
            if l > u {
                return Err(SchemeError::LowerExceedsUpper {
                    line,
                    step: step + 1,
                });
            }
        }
        if let Some(previous) = searches.last() {
            if previous.block_count() != pi.len() {
                return Err(SchemeError::BlockCountMismatch { line });
            }
        }

        searches.push(Search::new(pi, lower, upper));
    }
    Ok(Scheme::new(searches))
}

fn digits(token: &str, line: usize, part: &'static str) -> Result<Vec<usize>, SchemeError> {
    token
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as usize)
                .ok_or(SchemeError::NonDigit { line, part })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_scheme_with_comments_and_blanks() {
        let scheme = parse(
            "# pi    L    U\n\
             012 000 022\n\
             \n\
             210 000 012\n",
        )
        .unwrap();
        assert_eq!(scheme.len(), 2);
        assert_eq!(scheme.searches[0].pi, vec![0, 1, 2]);
        assert_eq!(scheme.searches[1].upper, vec![0, 1, 2]);
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let scheme = parse("  01   00   01  ").unwrap();
        assert_eq!(scheme.len(), 1);
    }

    #[test]
    fn test_reject_wrong_part_count() {
        assert_eq!(
            parse("01 00"),
            Err(SchemeError::PartCount { line: 1, found: 2 })
        );
    }

    #[test]
    fn test_reject_length_mismatch() {
        assert_eq!(
            parse("01 000 011"),
            Err(SchemeError::PartLengthMismatch { line: 1 })
        );
    }

    #[test]
    fn test_reject_non_digit() {
        assert_eq!(
            parse("0a 00 01"),
            Err(SchemeError::NonDigit {
                line: 1,
                part: "order"
            })
        );
    }

    #[test]
    fn test_reject_order_without_block_zero() {
        assert_eq!(
            parse("12 00 01"),
            Err(SchemeError::MissingBlockZero { line: 1 })
        );
    }

    #[test]
    fn test_reject_disconnected_order() {
        // "02" skips block 1, so its prefixes are not contiguous
        assert_eq!(
            parse("02 00 01"),
            Err(SchemeError::DisconnectedOrder { line: 1 })
        );
    }

    #[test]
    fn test_reject_non_monotone_bounds() {
        assert_eq!(
            parse("012 010 222"),
            Err(SchemeError::NonMonotoneBounds {
                line: 1,
                bound: "lower"
            })
        );
        assert_eq!(
            parse("012 000 210"),
            Err(SchemeError::NonMonotoneBounds {
                line: 1,
                bound: "upper"
            })
        );
    }

    #[test]
    fn test_reject_lower_above_upper() {
        assert_eq!(
            parse("012 022 012"),
            Err(SchemeError::LowerExceedsUpper { line: 1, step: 2 })
        );
    }

    #[test]
    fn test_reject_mixed_block_counts() {
        assert_eq!(
            parse("01 00 01\n012 000 012\n"),
            Err(SchemeError::BlockCountMismatch { line: 2 })
        );
    }

    #[test]
    fn test_error_reports_later_lines() {
        let err = parse("01 00 01\n# fine\n\n01 00 0x\n").unwrap_err();
        assert_eq!(err.line(), Some(4));
    }
}
