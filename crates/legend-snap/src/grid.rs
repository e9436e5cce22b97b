//! Flat row-major grid types carried between pipeline stages.
//!
//! [`IndexGrid`] is the per-pixel legend assignment (the intermediate
//! representation between classification and final color reconstruction);
//! [`DistanceGrid`] is the parallel per-pixel delta-E record used only for
//! reporting statistics.

/// A W x H grid of palette indices, row-major.
///
/// Invariant: every value is a valid index into the palette it was produced
/// against. Classification only emits valid indices and smoothing only
/// redistributes them, so the invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexGrid {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl IndexGrid {
    /// Wrap a row-major index buffer.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `data.len() == width * height`.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            width * height,
            "index buffer length ({}) must match {}x{}",
            data.len(),
            width,
            height,
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The index at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// The raw row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

/// A W x H grid of per-pixel delta-E values, row-major.
///
/// Produced alongside the [`IndexGrid`] by classification; consumed only by
/// the summary statistics, never fed back into the algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceGrid {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl DistanceGrid {
    /// Wrap a row-major distance buffer.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `data.len() == width * height`.
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mean delta-E over all pixels (f64 accumulator; 0.0 for an empty grid).
    pub fn mean(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.data.iter().map(|&d| d as f64).sum();
        (sum / self.data.len() as f64) as f32
    }

    /// Maximum delta-E over all pixels (0.0 for an empty grid).
    pub fn max(&self) -> f32 {
        self.data.iter().fold(0.0f32, |acc, &d| acc.max(d))
    }
}
