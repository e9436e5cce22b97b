//! LegendNormalizer builder -- the primary ergonomic entry point for the crate.
//!
//! [`LegendNormalizer`] wraps the normalization pipeline (pre-filter,
//! classification, mode smoothing, reconstruction) behind a fluent builder.

use crate::api::{NormalizeError, NormalizeOptions};
use crate::classify::classify;
use crate::output::NormalizedMap;
use crate::palette::Palette;
use crate::prefilter::median_filter;
use crate::smooth::mode_smooth;

/// High-level normalization builder.
///
/// # Design
///
/// - Constructor requires a validated [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`normalize()`](Self::normalize) takes `&self` so the builder is
///   **reusable** across multiple rasters (e.g. a directory of map tiles)
///
/// # Example
///
/// ```
/// use legend_snap::{LegendNormalizer, Palette};
///
/// let palette = Palette::from_hex(&[("#000000", "road"), ("#00FF00", "grass")]).unwrap();
///
/// let normalizer = LegendNormalizer::new(palette)
///     .median_window(3)
///     .mode_iterations(2);
///
/// let pixels = vec![[12u8, 240, 8]; 6];
/// let map = normalizer.normalize(&pixels, 3, 2).unwrap();
/// assert_eq!(map.width(), 3);
/// assert_eq!(map.height(), 2);
/// ```
pub struct LegendNormalizer {
    palette: Palette,
    options: NormalizeOptions,
}

impl LegendNormalizer {
    /// Create a new normalizer with the given legend palette.
    ///
    /// Defaults: no pre-filter, no smoothing passes, radius 1, no distance
    /// threshold.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            options: NormalizeOptions::default(),
        }
    }

    /// Set the median pre-filter window size (0 disables).
    #[inline]
    pub fn median_window(mut self, window: usize) -> Self {
        self.options = self.options.median_window(window);
        self
    }

    /// Set the number of majority-vote smoothing passes (0 disables).
    #[inline]
    pub fn mode_iterations(mut self, iterations: usize) -> Self {
        self.options = self.options.mode_iterations(iterations);
        self
    }

    /// Set the voting neighborhood radius (must be >= 1).
    #[inline]
    pub fn neighborhood_radius(mut self, radius: usize) -> Self {
        self.options = self.options.neighborhood_radius(radius);
        self
    }

    /// Set the maximum delta-E to accept a mapping; pixels beyond it are
    /// flagged instead of remapped.
    #[inline]
    pub fn distance_threshold(mut self, threshold: f32) -> Self {
        self.options = self.options.distance_threshold(threshold);
        self
    }

    /// Replace the whole option set at once.
    #[inline]
    pub fn options(mut self, options: NormalizeOptions) -> Self {
        self.options = options;
        self
    }

    /// The legend palette this normalizer snaps to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Normalize a raster to the legend.
    ///
    /// `pixels` is row-major `[R, G, B]` triples. Runs the full pipeline:
    ///
    /// 1. Median pre-filter (if configured) on a working copy
    /// 2. Nearest-legend classification of the (filtered) pixels
    /// 3. `mode_iterations` synchronized majority-vote passes
    ///
    /// The returned [`NormalizedMap`] keeps a copy of the **original**
    /// raster: the diff and the changed-pixel statistics always compare
    /// against the unfiltered input.
    ///
    /// # Errors
    ///
    /// - [`NormalizeError::EmptyImage`] for a zero-pixel raster
    /// - [`NormalizeError::DimensionMismatch`] if `pixels.len() != width * height`
    /// - [`NormalizeError::InvalidRadius`] if the neighborhood radius is 0
    pub fn normalize(
        &self,
        pixels: &[[u8; 3]],
        width: usize,
        height: usize,
    ) -> Result<NormalizedMap, NormalizeError> {
        if width == 0 || height == 0 || pixels.is_empty() {
            return Err(NormalizeError::EmptyImage);
        }
        if pixels.len() != width * height {
            return Err(NormalizeError::DimensionMismatch {
                expected: width * height,
                actual: pixels.len(),
            });
        }
        if self.options.neighborhood_radius == 0 {
            return Err(NormalizeError::InvalidRadius);
        }

        // 1. Pre-filter into a working copy; the original stays untouched
        //    for the diff.
        let filtered;
        let source: &[[u8; 3]] = if self.options.median_window > 1 {
            filtered = median_filter(pixels, width, height, self.options.median_window);
            &filtered
        } else {
            pixels
        };

        // 2. Classify
        let classification = classify(
            source,
            width,
            height,
            &self.palette,
            self.options.distance_threshold,
        );

        // 3. Smooth
        let indices = mode_smooth(
            &classification.indices,
            self.palette.len(),
            self.options.mode_iterations,
            self.options.neighborhood_radius,
        );

        Ok(NormalizedMap::new(
            indices,
            classification.distances,
            classification.flagged,
            pixels.to_vec(),
            self.palette.clone(),
        ))
    }
}
