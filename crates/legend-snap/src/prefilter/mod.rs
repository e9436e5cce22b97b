//! Pre-classification denoising.
//!
//! An optional fixed-window median filter applied to the raw RGB raster
//! before classification, suppressing high-frequency noise before palette
//! snapping. It never participates in the diff: the diff always compares
//! the original, unfiltered raster against the final output.

mod median;

pub use median::median_filter;
