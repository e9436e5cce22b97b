//! Color types and conversion utilities
//!
//! This module provides type-safe color handling with compile-time distinction
//! between the three color spaces the pipeline moves through.
//!
//! # Color Spaces
//!
//! - **sRGB** ([`Srgb`]): The standard encoding for image storage and display.
//!   Use for I/O and byte-exact comparisons.
//! - **Linear RGB** ([`LinearRgb`]): Gamma-decoded light intensity, the
//!   intermediate step toward XYZ.
//! - **CIE L\*a\*b\*** ([`Lab`]): Perceptually uniform space used for all
//!   distance comparisons (delta-E).
//!
//! # Example
//!
//! ```
//! use legend_snap::{Srgb, LinearRgb, Lab};
//!
//! // A pixel from an image (sRGB bytes)
//! let srgb = Srgb::from_u8(0, 255, 0);
//!
//! // Convert through linear RGB into Lab for perceptual distance
//! let lab = Lab::from(LinearRgb::from(srgb));
//! assert!(lab.a < 0.0); // green is on the negative a axis
//! ```

mod lab;
mod linear_rgb;
mod srgb;

pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use srgb::Srgb;
