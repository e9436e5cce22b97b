//! The result of a normalization run.

use crate::grid::{DistanceGrid, IndexGrid};
use crate::output::{DiffImage, Summary};
use crate::palette::Palette;

/// A fully normalized raster.
///
/// Holds the smoothed per-pixel legend assignment together with everything
/// needed to reconstruct the cleaned image, render the change overlay, and
/// compute summary statistics: the per-pixel delta-E record, the optional
/// over-threshold flag mask, the original raster, and the palette the run
/// was classified against.
///
/// # Example
///
/// ```
/// use legend_snap::{LegendNormalizer, Palette};
///
/// let palette = Palette::from_hex(&[("#000000", "road"), ("#00FF00", "grass")]).unwrap();
/// let pixels = vec![[12u8, 240, 8], [3, 4, 5]];
/// let map = LegendNormalizer::new(palette).normalize(&pixels, 2, 1).unwrap();
///
/// // Every output byte is a palette color
/// assert_eq!(map.to_rgb(), vec![0, 255, 0, 0, 0, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct NormalizedMap {
    indices: IndexGrid,
    distances: DistanceGrid,
    flagged: Option<Vec<bool>>,
    original: Vec<[u8; 3]>,
    palette: Palette,
}

impl NormalizedMap {
    pub(crate) fn new(
        indices: IndexGrid,
        distances: DistanceGrid,
        flagged: Option<Vec<bool>>,
        original: Vec<[u8; 3]>,
        palette: Palette,
    ) -> Self {
        Self {
            indices,
            distances,
            flagged,
            original,
            palette,
        }
    }

    /// Raster width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.indices.width()
    }

    /// Raster height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.indices.height()
    }

    /// The smoothed per-pixel legend assignment.
    #[inline]
    pub fn indices(&self) -> &IndexGrid {
        &self.indices
    }

    /// Per-pixel delta-E to the nearest legend entry (pre-smoothing).
    #[inline]
    pub fn distances(&self) -> &DistanceGrid {
        &self.distances
    }

    /// Over-threshold flag mask, if a distance threshold was configured.
    #[inline]
    pub fn flagged(&self) -> Option<&[bool]> {
        self.flagged.as_deref()
    }

    /// The legend palette this raster was classified against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The original (unfiltered) raster the run started from.
    #[inline]
    pub fn original(&self) -> &[[u8; 3]] {
        &self.original
    }

    /// Reconstruct the cleaned raster as a flat row-major RGB byte buffer.
    ///
    /// Each pixel becomes its assigned legend color, except over-threshold
    /// flagged pixels, which keep their original bytes so suspect regions
    /// survive for manual inspection.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.original.len() * 3);
        for (i, &idx) in self.indices.as_slice().iter().enumerate() {
            let rgb = match &self.flagged {
                Some(mask) if mask[i] => self.original[i],
                _ => self.palette.rgb(idx as usize),
            };
            out.extend_from_slice(&rgb);
        }
        out
    }

    /// Render the change overlay against the original raster.
    pub fn diff(&self) -> DiffImage {
        let cleaned = self.to_rgb();
        DiffImage::render(&self.original, &cleaned, self.width(), self.height())
    }

    /// Compute summary statistics for this run.
    ///
    /// Takes the already-rendered diff so callers producing both outputs do
    /// not pay for the comparison twice.
    pub fn summary(&self, diff: &DiffImage) -> Summary {
        Summary::compute(self, diff)
    }
}
