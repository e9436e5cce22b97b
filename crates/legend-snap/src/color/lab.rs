//! CIE L\*a\*b\* perceptual color space
//!
//! L\*a\*b\* is a perceptually uniform color space: Euclidean distance
//! (delta-E) between two Lab values correlates with how different the colors
//! look to a human observer. All nearest-legend matching happens here.
//!
//! The conversion goes linear RGB -> CIE XYZ (standard sRGB/D65 matrix) ->
//! L\*a\*b\* with the D65 reference white and the piecewise cube-root
//! transfer function. All math is f32.

use super::linear_rgb::LinearRgb;

/// D65 reference white.
const REF_X: f32 = 0.95047;
const REF_Y: f32 = 1.0;
const REF_Z: f32 = 1.08883;

/// Transfer-function breakpoint, delta = 6/29.
const DELTA: f32 = 6.0 / 29.0;

/// Piecewise cube-root transfer function, breakpoint at (6/29)^3.
#[inline]
fn f(t: f32) -> f32 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Inverse of [`f`].
#[inline]
fn f_inv(t: f32) -> f32 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// A color in CIE L\*a\*b\* space (D65).
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Values are not clamped; the inverse transform of out-of-gamut Lab values
/// produces out-of-range linear RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f32,
    /// Green-red axis: roughly -128.0 to 128.0
    pub a: f32,
    /// Blue-yellow axis: roughly -128.0 to 128.0
    pub b: f32,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Euclidean delta-E to another Lab color.
    ///
    /// This is the perceptual distance metric used for legend matching and
    /// for the reported distance statistics.
    ///
    /// # Example
    ///
    /// ```
    /// use legend_snap::Lab;
    ///
    /// let white = Lab::new(100.0, 0.0, 0.0);
    /// let black = Lab::new(0.0, 0.0, 0.0);
    /// assert!((white.distance(black) - 100.0).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn distance(self, other: Lab) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared delta-E; cheaper when only comparing magnitudes.
    #[inline]
    pub fn distance_squared(self, other: Lab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }
}

impl From<LinearRgb> for Lab {
    /// Convert linear RGB to L\*a\*b\* via CIE XYZ.
    ///
    /// Uses the standard sRGB/D65 matrix and reference white
    /// (Xr = 0.95047, Yr = 1.0, Zr = 1.08883).
    fn from(rgb: LinearRgb) -> Self {
        // Linear sRGB to XYZ
        let x = 0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b;
        let y = 0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b;
        let z = 0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b;

        // Normalize by the reference white, apply the transfer function
        let fx = f(x / REF_X);
        let fy = f(y / REF_Y);
        let fz = f(z / REF_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Lab> for LinearRgb {
    /// Convert L\*a\*b\* back to linear RGB (inverse transform).
    ///
    /// The result is not clamped; out-of-gamut Lab values produce linear
    /// RGB outside 0.0..=1.0.
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;

        let x = f_inv(fx) * REF_X;
        let y = f_inv(fy) * REF_Y;
        let z = f_inv(fz) * REF_Z;

        // XYZ to linear sRGB (inverse matrix)
        LinearRgb {
            r: 3.2404542 * x - 1.5371385 * y - 0.4985314 * z,
            g: -0.9692660 * x + 1.8760108 * y + 0.0415560 * z,
            b: 0.0556434 * x - 0.2040259 * y + 1.0572252 * z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Srgb;

    fn lab_of(r: u8, g: u8, b: u8) -> Lab {
        Lab::from(LinearRgb::from(Srgb::from_u8(r, g, b)))
    }

    /// Reference values computed from the same classic sRGB/D65 constants
    /// (e.g. Lindbloom's calculator).
    #[test]
    fn test_lab_known_values() {
        let cases = [
            ((255u8, 255u8, 255u8), (100.0, 0.0, 0.0)),
            ((0, 0, 0), (0.0, 0.0, 0.0)),
            ((255, 0, 0), (53.2408, 80.0925, 67.2032)),
            ((0, 255, 0), (87.7347, -86.1827, 83.1793)),
            ((0, 0, 255), (32.2970, 79.1875, -107.8602)),
        ];

        for ((r, g, b), (el, ea, eb)) in cases {
            let lab = lab_of(r, g, b);
            assert!(
                (lab.l - el).abs() < 0.01,
                "L mismatch for ({r},{g},{b}): got {}, expected {el}",
                lab.l
            );
            assert!(
                (lab.a - ea).abs() < 0.01,
                "a mismatch for ({r},{g},{b}): got {}, expected {ea}",
                lab.a
            );
            assert!(
                (lab.b - eb).abs() < 0.01,
                "b mismatch for ({r},{g},{b}): got {}, expected {eb}",
                lab.b
            );
        }
    }

    /// Greys sit on the L axis: a and b vanish.
    #[test]
    fn test_achromatic_axis() {
        for v in [0u8, 32, 64, 128, 192, 255] {
            let lab = lab_of(v, v, v);
            assert!(lab.a.abs() < 0.01, "grey {v} has a = {}", lab.a);
            assert!(lab.b.abs() < 0.01, "grey {v} has b = {}", lab.b);
        }
    }

    /// Cross-check against the `palette` crate. Its sRGB matrix carries a few
    /// more digits than the classic constants, so the tolerance is loose.
    #[test]
    fn test_lab_matches_palette_crate() {
        use palette::{IntoColor, LinSrgb};

        let test_colors = [
            (1.0f32, 0.0f32, 0.0f32),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (0.5, 0.5, 0.5),
            (1.0, 1.0, 1.0),
            (0.0, 0.0, 0.0),
            (0.2, 0.6, 0.1),
        ];

        for (r, g, b) in test_colors {
            let ours = Lab::from(LinearRgb::new(r, g, b));
            let theirs: palette::Lab = LinSrgb::new(r, g, b).into_color();

            assert!(
                (ours.l - theirs.l).abs() < 0.5,
                "L mismatch for ({r},{g},{b}): ours={}, palette={}",
                ours.l,
                theirs.l
            );
            assert!(
                (ours.a - theirs.a).abs() < 0.5,
                "a mismatch for ({r},{g},{b}): ours={}, palette={}",
                ours.a,
                theirs.a
            );
            assert!(
                (ours.b - theirs.b).abs() < 0.5,
                "b mismatch for ({r},{g},{b}): ours={}, palette={}",
                ours.b,
                theirs.b
            );
        }
    }

    /// sRGB bytes -> Lab -> sRGB bytes round-trips within 1 LSB.
    #[test]
    fn test_lab_round_trip() {
        let samples = [
            [255u8, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 0],
            [0, 255, 255],
            [255, 0, 255],
            [16, 16, 16],
            [69, 53, 3],
            [128, 128, 128],
            [255, 165, 0],
            [150, 75, 0],
            [255, 255, 255],
            [0, 0, 0],
        ];

        for rgb in samples {
            let lab = Lab::from(LinearRgb::from(Srgb::from_bytes(rgb)));
            let linear = LinearRgb::from(lab);
            let clamped = LinearRgb::new(
                linear.r.clamp(0.0, 1.0),
                linear.g.clamp(0.0, 1.0),
                linear.b.clamp(0.0, 1.0),
            );
            let back = Srgb::from(clamped).to_bytes();

            for c in 0..3 {
                let diff = (back[c] as i32 - rgb[c] as i32).abs();
                assert!(
                    diff <= 1,
                    "round-trip of {rgb:?} channel {c}: {} vs {}",
                    back[c],
                    rgb[c]
                );
            }
        }
    }

    #[test]
    fn test_distance_symmetry() {
        let a = lab_of(0, 255, 0);
        let b = lab_of(69, 53, 3);
        assert_eq!(a.distance(b).to_bits(), b.distance(a).to_bits());
        assert!(a.distance(a) < 1e-6);
    }

    #[test]
    fn test_distance_known_values() {
        let white = Lab::new(100.0, 0.0, 0.0);
        let black = Lab::new(0.0, 0.0, 0.0);
        assert!((white.distance(black) - 100.0).abs() < 1e-3);
        assert!((white.distance_squared(black) - 10000.0).abs() < 0.1);
    }

    /// Repeated conversion of the same input is bit-identical.
    #[test]
    fn test_deterministic() {
        let a = lab_of(150, 75, 0);
        let b = lab_of(150, 75, 0);
        assert_eq!(a.l.to_bits(), b.l.to_bits());
        assert_eq!(a.a.to_bits(), b.a.to_bits());
        assert_eq!(a.b.to_bits(), b.b.to_bits());
    }
}
