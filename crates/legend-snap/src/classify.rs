//! Whole-raster nearest-legend classification.
//!
//! Converts each pixel to CIE Lab and assigns it the index of the nearest
//! legend entry ([`Palette::find_nearest`]), producing the
//! [`IndexGrid`] / [`DistanceGrid`] pair the rest of the pipeline operates
//! on. This scan dominates runtime (O(W * H * legend size)); pixels are
//! independent, so the work is spread across rayon workers. Parallelism
//! never changes the result: every decision is per-pixel.

use rayon::prelude::*;

use crate::color::{Lab, LinearRgb, Srgb};
use crate::grid::{DistanceGrid, IndexGrid};
use crate::palette::Palette;

/// Result of classifying a raster against a legend.
#[derive(Debug, Clone)]
pub struct Classification {
    /// Nearest legend entry per pixel.
    pub indices: IndexGrid,
    /// Delta-E to that entry per pixel.
    pub distances: DistanceGrid,
    /// When a distance threshold is configured: `true` marks pixels whose
    /// delta-E exceeded it (flagged instead of remapped). `None` when no
    /// threshold is set.
    pub flagged: Option<Vec<bool>>,
}

/// Classify every pixel of a raster to its nearest legend entry.
///
/// `pixels` is row-major `[R, G, B]` triples with
/// `pixels.len() == width * height` (debug-asserted; the public pipeline
/// validates dimensions before calling). Ties go to the first legend entry
/// in declaration order.
///
/// With `distance_threshold = Some(t)`, pixels whose delta-E is strictly
/// greater than `t` are marked in the flag mask. They still receive their
/// nearest index so neighborhood votes in later smoothing stay well-defined;
/// reconstruction is where the flag takes effect.
///
/// # Example
///
/// ```
/// use legend_snap::{classify, Palette};
///
/// let palette = Palette::from_hex(&[("#000000", "road"), ("#00FF00", "grass")]).unwrap();
/// let pixels = [[16u8, 16, 16], [10, 250, 8]];
/// let result = classify(&pixels, 2, 1, &palette, None);
///
/// assert_eq!(result.indices.as_slice(), &[0, 1]);
/// assert!(result.flagged.is_none());
/// ```
pub fn classify(
    pixels: &[[u8; 3]],
    width: usize,
    height: usize,
    palette: &Palette,
    distance_threshold: Option<f32>,
) -> Classification {
    debug_assert_eq!(pixels.len(), width * height);

    let (indices, distances): (Vec<u8>, Vec<f32>) = pixels
        .par_iter()
        .with_min_len(4096)
        .map(|&rgb| {
            let lab = Lab::from(LinearRgb::from(Srgb::from_bytes(rgb)));
            let (idx, dist) = palette.find_nearest(lab);
            (idx as u8, dist)
        })
        .unzip();

    let flagged = distance_threshold.map(|t| distances.iter().map(|&d| d > t).collect());

    Classification {
        indices: IndexGrid::new(indices, width, height),
        distances: DistanceGrid::new(distances, width, height),
        flagged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legend() -> Palette {
        Palette::from_hex(&[
            ("#00FF00", "grass"),
            ("#0000FF", "water"),
            ("#000000", "road"),
        ])
        .unwrap()
    }

    #[test]
    fn test_classify_exact_legend_colors() {
        let palette = legend();
        let pixels = [[0u8, 255, 0], [0, 0, 255], [0, 0, 0]];
        let result = classify(&pixels, 3, 1, &palette, None);

        assert_eq!(result.indices.as_slice(), &[0, 1, 2]);
        for &d in result.distances.as_slice() {
            assert!(d < 1e-6, "exact legend pixel has distance {d}");
        }
    }

    #[test]
    fn test_classify_noisy_pixels() {
        let palette = legend();
        let pixels = [[16u8, 16, 16], [30, 220, 25], [10, 20, 230]];
        let result = classify(&pixels, 3, 1, &palette, None);

        assert_eq!(result.indices.as_slice(), &[2, 0, 1]);
        for &d in result.distances.as_slice() {
            assert!(d > 0.0);
        }
    }

    #[test]
    fn test_classify_matches_sequential_scan() {
        // The parallel classification must equal a hand-rolled sequential one.
        let palette = legend();
        let pixels: Vec<[u8; 3]> = (0..64u32)
            .map(|i| [(i * 37 % 256) as u8, (i * 101 % 256) as u8, (i * 7 % 256) as u8])
            .collect();
        let result = classify(&pixels, 8, 8, &palette, None);

        for (i, &rgb) in pixels.iter().enumerate() {
            let lab = Lab::from(LinearRgb::from(Srgb::from_bytes(rgb)));
            let (idx, dist) = palette.find_nearest(lab);
            assert_eq!(result.indices.as_slice()[i], idx as u8);
            assert_eq!(result.distances.as_slice()[i].to_bits(), dist.to_bits());
        }
    }

    #[test]
    fn test_threshold_flags_distant_pixels() {
        let palette = legend();
        // Orange is far from all three legend entries
        let pixels = [[0u8, 255, 0], [255, 165, 0]];
        let result = classify(&pixels, 2, 1, &palette, Some(10.0));

        let flagged = result.flagged.expect("threshold set");
        assert_eq!(flagged, vec![false, true]);
        // The flagged pixel still carries a valid nearest index
        assert!((result.indices.as_slice()[1] as usize) < palette.len());
    }

    #[test]
    fn test_threshold_boundary_not_flagged() {
        // Flagging is strictly-greater: a pixel exactly at the threshold passes.
        let palette = legend();
        let pixels = [[0u8, 255, 0]];
        let result = classify(&pixels, 1, 1, &palette, Some(0.0));
        let flagged = result.flagged.expect("threshold set");
        assert_eq!(flagged, vec![false]);
    }
}
