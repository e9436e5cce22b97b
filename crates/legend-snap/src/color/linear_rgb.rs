//! Linear RGB color type
//!
//! Linear RGB is the gamma-decoded form of sRGB: values proportional to
//! physical light intensity. It is the required intermediate step between
//! sRGB bytes and CIE XYZ / L\*a\*b\*.

use super::srgb::Srgb;

/// Gamma-decode one sRGB channel to linear light (IEC 61966-2-1).
///
/// Piecewise: `v <= 0.04045` uses the linear segment `v / 12.92`, otherwise
/// `((v + 0.055) / 1.055)^2.4`. Computed directly rather than through a
/// lookup table; each pixel is converted exactly once per classification, so
/// there is no repeated-conversion hot spot to amortize.
#[inline]
pub(crate) fn srgb_to_linear(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Gamma-encode one linear channel back to sRGB (inverse of [`srgb_to_linear`]).
#[inline]
pub(crate) fn linear_to_srgb(v: f32) -> f32 {
    if v <= 0.003_130_8 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// A color in linear RGB color space.
///
/// Values are typically in 0.0..=1.0 but are not clamped; the inverse Lab
/// transform may produce slightly out-of-range intermediates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Gamma-decode sRGB to linear RGB (IEC 61966-2-1).
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
