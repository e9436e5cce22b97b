//! Change-overlay rendering.

/// Replacement color for changed pixels in the overlay.
const HIGHLIGHT: [u8; 3] = [255, 0, 0];

/// A visualization of which pixels the pipeline changed.
///
/// Starts as a copy of the original raster; every pixel whose cleaned RGB
/// differs from its original RGB is replaced with solid red. The comparison
/// is always against the **original** input, never the median-filtered
/// working copy, so the overlay answers "what did the whole run change".
#[derive(Debug, Clone)]
pub struct DiffImage {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
    changed_count: usize,
}

impl DiffImage {
    /// Render the overlay from the original raster and the cleaned flat
    /// RGB buffer.
    pub(crate) fn render(
        original: &[[u8; 3]],
        cleaned: &[u8],
        width: usize,
        height: usize,
    ) -> Self {
        debug_assert_eq!(original.len(), width * height);
        debug_assert_eq!(cleaned.len(), original.len() * 3);

        let mut pixels = Vec::with_capacity(cleaned.len());
        let mut changed_count = 0;

        for (i, &rgb) in original.iter().enumerate() {
            let after = &cleaned[i * 3..i * 3 + 3];
            if after != rgb {
                changed_count += 1;
                pixels.extend_from_slice(&HIGHLIGHT);
            } else {
                pixels.extend_from_slice(&rgb);
            }
        }

        Self {
            pixels,
            width,
            height,
            changed_count,
        }
    }

    /// Overlay width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Overlay height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The overlay as a flat row-major RGB byte buffer.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Number of pixels that changed.
    #[inline]
    pub fn changed_count(&self) -> usize {
        self.changed_count
    }

    /// Changed pixels as a percentage of the raster (0.0 for an empty one).
    pub fn changed_percent(&self) -> f64 {
        let total = self.width * self.height;
        if total == 0 {
            return 0.0;
        }
        self.changed_count as f64 * 100.0 / total as f64
    }
}
