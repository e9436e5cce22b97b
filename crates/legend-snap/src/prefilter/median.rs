//! Fixed-window per-channel median filter.

use rayon::prelude::*;

/// Apply a per-channel median filter with the given window size.
///
/// `window` is the side length of the square neighborhood; `0` and `1`
/// disable the filter (the input is returned unchanged), and even sizes are
/// rounded up to the next odd size so the window has a center pixel.
///
/// Boundary policy: the window is clamped to the raster, so only in-bounds
/// pixels enter the median (no replication or reflection). Near edges and
/// corners the sample count is therefore smaller and may be even; the upper
/// median (element at `len / 2` after sorting) is taken.
///
/// Each channel is filtered independently. Output rows are computed in
/// parallel from the read-only input.
///
/// # Example
///
/// ```
/// use legend_snap::median_filter;
///
/// // A single bright speckle in a dark 3x3 patch is removed
/// let mut pixels = vec![[10u8, 10, 10]; 9];
/// pixels[4] = [250, 250, 250];
/// let filtered = median_filter(&pixels, 3, 3, 3);
/// assert_eq!(filtered[4], [10, 10, 10]);
/// ```
pub fn median_filter(
    pixels: &[[u8; 3]],
    width: usize,
    height: usize,
    window: usize,
) -> Vec<[u8; 3]> {
    debug_assert_eq!(pixels.len(), width * height);

    if window <= 1 {
        return pixels.to_vec();
    }
    // A median needs a center pixel
    let window = if window % 2 == 0 { window + 1 } else { window };
    let radius = window / 2;

    let mut out = vec![[0u8; 3]; pixels.len()];
    out.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let mut samples: [Vec<u8>; 3] = [
            Vec::with_capacity(window * window),
            Vec::with_capacity(window * window),
            Vec::with_capacity(window * window),
        ];
        let y_lo = y.saturating_sub(radius);
        let y_hi = (y + radius).min(height - 1);

        for (x, cell) in row.iter_mut().enumerate() {
            let x_lo = x.saturating_sub(radius);
            let x_hi = (x + radius).min(width - 1);

            for s in samples.iter_mut() {
                s.clear();
            }
            for yy in y_lo..=y_hi {
                for xx in x_lo..=x_hi {
                    let p = pixels[yy * width + xx];
                    samples[0].push(p[0]);
                    samples[1].push(p[1]);
                    samples[2].push(p[2]);
                }
            }

            for (c, s) in samples.iter_mut().enumerate() {
                s.sort_unstable();
                cell[c] = s[s.len() / 2];
            }
        }
    });

    out
}
