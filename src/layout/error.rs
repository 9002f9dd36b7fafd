//! Error types for the layout engine

use thiserror::Error;

use crate::error::SchemeError;

/// Errors that can occur during layout computation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// A search failed structural validation before enumeration
    #[error("search {index}: {reason}")]
    InvalidSearch { index: usize, reason: String },

    /// Expansion against the target sequence length failed
    #[error(transparent)]
    Scheme(#[from] SchemeError),
}
