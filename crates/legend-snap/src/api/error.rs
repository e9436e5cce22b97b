//! Error types for the normalization pipeline and unified public wrapper.

use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Error type for a normalization run.
///
/// These are internal-invariant or input-shape failures; no partial output
/// is produced when any of them is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// Pixel buffer length does not match the declared dimensions.
    ///
    /// A stage receiving a grid whose size disagrees with the raster is a
    /// programming error, not a user-recoverable condition.
    DimensionMismatch {
        /// `width * height`
        expected: usize,
        /// Actual pixel buffer length
        actual: usize,
    },
    /// The raster has zero pixels.
    EmptyImage,
    /// The voting neighborhood radius is zero.
    InvalidRadius,
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer length {} does not match raster dimensions (expected {})",
                    actual, expected
                )
            }
            NormalizeError::EmptyImage => {
                write!(f, "raster has zero pixels")
            }
            NormalizeError::InvalidRadius => {
                write!(f, "neighborhood radius must be at least 1")
            }
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Unified error type for the legend-snap public API.
///
/// Wraps all error types from the crate into a single enum for convenient
/// `?` propagation in application code.
///
/// # Example
///
/// ```
/// use legend_snap::{Palette, SnapError};
///
/// fn load_legend() -> Result<Palette, SnapError> {
///     let palette = Palette::from_hex(&[("#000000", "road"), ("#00FF00", "grass")])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug)]
pub enum SnapError {
    /// Legend validation error (empty, duplicate, too many, or parse error)
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// Pipeline input error (dimensions, radius)
    Normalize(NormalizeError),
}

impl fmt::Display for SnapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapError::Palette(err) => write!(f, "legend error: {}", err),
            SnapError::ParseColor(err) => write!(f, "color parse error: {}", err),
            SnapError::Normalize(err) => write!(f, "normalize error: {}", err),
        }
    }
}

impl std::error::Error for SnapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapError::Palette(err) => Some(err),
            SnapError::ParseColor(err) => Some(err),
            SnapError::Normalize(err) => Some(err),
        }
    }
}

impl From<PaletteError> for SnapError {
    fn from(err: PaletteError) -> Self {
        SnapError::Palette(err)
    }
}

impl From<ParseColorError> for SnapError {
    fn from(err: ParseColorError) -> Self {
        SnapError::ParseColor(err)
    }
}

impl From<NormalizeError> for SnapError {
    fn from(err: NormalizeError) -> Self {
        SnapError::Normalize(err)
    }
}
