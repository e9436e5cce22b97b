//! Pipeline configuration options.

/// Configuration options for the normalization pipeline.
///
/// # Defaults
///
/// All stages that can be disabled are disabled: no median pre-filter, no
/// smoothing passes, no distance threshold. The neighborhood radius defaults
/// to 1 (3x3 voting blocks).
///
/// # Example
///
/// ```
/// use legend_snap::NormalizeOptions;
///
/// let options = NormalizeOptions::new()
///     .median_window(3)
///     .mode_iterations(2);
///
/// assert_eq!(options.median_window, 3);
/// assert_eq!(options.neighborhood_radius, 1);
/// ```
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Median pre-filter window size; 0 (or 1) disables the filter.
    pub median_window: usize,

    /// Number of majority-vote smoothing passes; 0 disables smoothing.
    pub mode_iterations: usize,

    /// Voting neighborhood radius (1 = 3x3 blocks). Must be >= 1.
    pub neighborhood_radius: usize,

    /// Optional maximum delta-E to accept a mapping.
    ///
    /// When set, pixels whose nearest-entry distance exceeds the threshold
    /// are flagged instead of remapped: they keep their original RGB in the
    /// cleaned output and are counted separately in the summary.
    pub distance_threshold: Option<f32>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            median_window: 0,
            mode_iterations: 0,
            neighborhood_radius: 1,
            distance_threshold: None,
        }
    }
}

impl NormalizeOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the median pre-filter window size (0 disables).
    #[inline]
    pub fn median_window(mut self, window: usize) -> Self {
        self.median_window = window;
        self
    }

    /// Set the number of majority-vote smoothing passes (0 disables).
    #[inline]
    pub fn mode_iterations(mut self, iterations: usize) -> Self {
        self.mode_iterations = iterations;
        self
    }

    /// Set the voting neighborhood radius (must be >= 1).
    #[inline]
    pub fn neighborhood_radius(mut self, radius: usize) -> Self {
        self.neighborhood_radius = radius;
        self
    }

    /// Set the maximum delta-E to accept a mapping.
    #[inline]
    pub fn distance_threshold(mut self, threshold: f32) -> Self {
        self.distance_threshold = Some(threshold);
        self
    }
}
