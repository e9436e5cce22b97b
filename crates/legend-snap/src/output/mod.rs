//! Pipeline output types.
//!
//! [`NormalizedMap`] is the result of a normalization run; from it the
//! caller derives the cleaned RGB raster, the [`DiffImage`] overlay, and
//! the per-legend [`Summary`] statistics.

mod diff;
mod normalized_map;
mod summary;

pub use diff::DiffImage;
pub use normalized_map::NormalizedMap;
pub use summary::{EntrySummary, Summary};
