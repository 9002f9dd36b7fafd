//! Error types for scheme parsing and lookup

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors surfaced at the caller boundary: malformed descriptors, failed
/// generator lookups, and impossible expansions. Malformed input is always
/// rejected with the offending line, never silently repaired.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemeError {
    #[error("line {line}: expected three whitespace-separated parts, found {found}")]
    PartCount { line: usize, found: usize },

    #[error("line {line}: all three parts must have the same length")]
    PartLengthMismatch { line: usize },

    #[error("line {line}: {part} part may only contain digits")]
    NonDigit { line: usize, part: &'static str },

    #[error("line {line}: order must include block 0")]
    MissingBlockZero { line: usize },

    #[error("line {line}: order violates the connectivity property")]
    DisconnectedOrder { line: usize },

    #[error("line {line}: {bound} bounds are not monotonically non-decreasing")]
    NonMonotoneBounds { line: usize, bound: &'static str },

    #[error("line {line}: lower bound exceeds upper bound at step {step}")]
    LowerExceedsUpper { line: usize, step: usize },

    #[error("line {line}: block count differs from the previous searches")]
    BlockCountMismatch { line: usize },

    #[error("unknown generator '{0}'")]
    UnknownGenerator(String),

    #[error("generator '{generator}' cannot produce a scheme for {min_errors}..{max_errors} errors")]
    UnsupportedBudget {
        generator: String,
        min_errors: usize,
        max_errors: usize,
    },

    #[error("sequence length {sequence_length} is shorter than the {block_count} blocks")]
    SequenceTooShort {
        sequence_length: usize,
        block_count: usize,
    },
}

impl SchemeError {
    /// Source line the error refers to, if any (1-based).
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::PartCount { line, .. }
            | Self::PartLengthMismatch { line }
            | Self::NonDigit { line, .. }
            | Self::MissingBlockZero { line }
            | Self::DisconnectedOrder { line }
            | Self::NonMonotoneBounds { line, .. }
            | Self::LowerExceedsUpper { line, .. }
            | Self::BlockCountMismatch { line } => Some(*line),
            Self::UnknownGenerator(_)
            | Self::UnsupportedBudget { .. }
            | Self::SequenceTooShort { .. } => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(line) = self.line() else {
            return self.to_string();
        };
        let span = line_span(source, line);
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.to_string())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf)
            .is_ok();
        if written {
            String::from_utf8(buf).unwrap_or_else(|_| self.to_string())
        } else {
            self.to_string()
        }
    }
}

/// Byte span of a 1-based source line, excluding the terminator.
fn line_span(source: &str, line: usize) -> Span {
    let mut start = 0;
    for (idx, raw) in source.split_inclusive('\n').enumerate() {
        if idx + 1 == line {
            let text = raw.trim_end_matches(['\n', '\r']);
            return start..start + text.len().max(1);
        }
        start += raw.len();
    }
    0..source.len().max(1)
}
