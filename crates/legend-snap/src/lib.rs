//! legend-snap: nearest-legend color normalization for map rasters
//!
//! This library takes a raster image whose colors are a noisy approximation of
//! a fixed legend (hand-painted or compression-damaged top-down map tiles) and
//! produces a cleaned raster in which every pixel is exactly one of the legend
//! colors, plus a diff visualization of which pixels changed.
//!
//! # Quick Start
//!
//! The [`LegendNormalizer`] builder is the primary entry point:
//!
//! ```
//! use legend_snap::{LegendNormalizer, Palette};
//!
//! let palette = Palette::from_hex(&[("#000000", "road"), ("#00FF00", "grass")]).unwrap();
//!
//! let normalizer = LegendNormalizer::new(palette)
//!     .median_window(3)
//!     .mode_iterations(2);
//!
//! let pixels = vec![[16u8, 250, 12]; 4];
//! let map = normalizer.normalize(&pixels, 2, 2).unwrap();
//!
//! // Every output pixel is an exact legend color
//! assert_eq!(&map.to_rgb()[0..3], &[0, 255, 0]);
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! raw RGB raster
//!     |
//!     v
//! [median pre-filter]      (optional, suppresses high-frequency noise)
//!     |
//!     v
//! classify per pixel       (nearest legend entry by CIE Lab delta-E)
//!     |                    -> IndexGrid + DistanceGrid
//!     v
//! [mode smoothing x N]     (synchronized majority vote over 3x3 blocks,
//!     |                     removes isolated speckles)
//!     v
//! reconstruct RGB          (IndexGrid -> legend colors)
//!     |
//!     v
//! diff vs ORIGINAL raster  (changed pixels marked pure red)
//! ```
//!
//! The diff always compares against the original, unfiltered input; the
//! median pre-filter only influences which legend entry a pixel snaps to.
//!
//! # Color Science
//!
//! Nearest-color matching happens in CIE L\*a\*b\* (D65), not in raw RGB.
//! Euclidean distance in RGB badly mismatches human perception: two greens
//! that look identical can be numerically farther apart than a green and a
//! brown that look nothing alike. Lab is designed so that Euclidean distance
//! (delta-E) correlates with perceived difference, which is what makes
//! "snap to the visually closest legend color" work on hand-painted input.
//!
//! The conversion chain is sRGB -> linear RGB (IEC 61966-2-1 gamma decode)
//! -> CIE XYZ (standard sRGB/D65 matrix) -> L\*a\*b\* (D65 reference white,
//! piecewise cube-root transfer). All math is f32; conversions are pure and
//! deterministic, so identical input always produces bit-identical output.
//!
//! # Determinism
//!
//! Two tie-break rules are load-bearing contracts:
//!
//! - **Classification**: the first legend entry (in declaration order)
//!   achieving the minimum distance wins. Legend order is user-significant.
//! - **Mode smoothing**: the index first encountered in row-major neighbor
//!   scan order among those achieving the maximum count wins, and every pass
//!   reads only the previous pass's grid.
//!
//! Row parallelism (rayon) never changes results: workers write disjoint
//! regions and all ordering-sensitive decisions are per-pixel.

pub mod api;
pub mod classify;
pub mod color;
pub mod grid;
pub mod output;
pub mod palette;
pub mod prefilter;
pub mod smooth;


pub use api::{LegendNormalizer, NormalizeError, NormalizeOptions, SnapError};
pub use classify::{classify, Classification};
pub use color::{Lab, LinearRgb, Srgb};
pub use grid::{DistanceGrid, IndexGrid};
pub use output::{DiffImage, EntrySummary, NormalizedMap, Summary};
pub use palette::{Palette, PaletteError, ParseColorError};
pub use prefilter::median_filter;
pub use smooth::mode_smooth;
