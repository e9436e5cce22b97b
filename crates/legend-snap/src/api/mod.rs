//! Public API for the legend-snap crate.
//!
//! This module provides the high-level entry point: the [`LegendNormalizer`]
//! builder, its [`NormalizeOptions`], and the [`NormalizeError`] /
//! [`SnapError`] error types.

mod builder;
mod error;
mod options;

pub use builder::LegendNormalizer;
pub use error::{NormalizeError, SnapError};
pub use options::NormalizeOptions;
