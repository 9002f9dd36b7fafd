//! Coordinate layout for enumerated search trees
//!
//! This module turns a scheme into positioned drawing marks: node circles,
//! tree edges, block separators, and block labels, each at absolute
//! coordinates, ready for serialization into any vector graphics target.

pub mod config;
pub mod engine;
pub mod error;
pub mod types;

pub use config::LayoutConfig;
pub use engine::layout_scheme;
pub use error::LayoutError;
pub use types::*;
