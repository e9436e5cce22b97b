//! Iterative majority-vote (mode) smoothing over the index grid.
//!
//! Removes isolated classification speckles: each pass replaces every cell
//! with the most frequent index in its neighborhood. Passes are fully
//! synchronized (every cell of pass `p + 1` reads only pass `p`'s grid), so
//! a pass cannot cascade its own changes. Within a pass, output rows are
//! computed in parallel from the read-only previous grid.

use rayon::prelude::*;

use crate::grid::IndexGrid;

/// Run `iterations` majority-vote passes over the grid.
///
/// Each cell becomes the most frequent index in the `(2r + 1) x (2r + 1)`
/// neighborhood of the previous grid, clamped at the raster boundary
/// (out-of-range cells never vote). Tie-break: the index **first
/// encountered in row-major neighbor scan order** among those achieving the
/// maximum count. This exact rule is a compatibility contract; do not
/// replace it with lowest-index or own-index-biased variants.
///
/// `iterations = 0` returns a copy of the input unchanged.
///
/// # Example
///
/// ```
/// use legend_snap::{mode_smooth, IndexGrid};
///
/// // A single speckle of index 1 surrounded by index 0
/// let grid = IndexGrid::new(vec![0, 0, 0, 0, 1, 0, 0, 0, 0], 3, 3);
/// let smoothed = mode_smooth(&grid, 2, 1, 1);
/// assert_eq!(smoothed.get(1, 1), 0);
/// ```
pub fn mode_smooth(
    grid: &IndexGrid,
    palette_len: usize,
    iterations: usize,
    radius: usize,
) -> IndexGrid {
    let width = grid.width();
    let height = grid.height();
    let mut current: Vec<u8> = grid.as_slice().to_vec();

    for _ in 0..iterations {
        let prev = current;
        let mut next = vec![0u8; prev.len()];

        next.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
            let mut counts = vec![0u32; palette_len];
            let y_lo = y.saturating_sub(radius);
            let y_hi = (y + radius).min(height - 1);

            for (x, cell) in row.iter_mut().enumerate() {
                let x_lo = x.saturating_sub(radius);
                let x_hi = (x + radius).min(width - 1);

                counts.iter_mut().for_each(|c| *c = 0);
                for yy in y_lo..=y_hi {
                    for xx in x_lo..=x_hi {
                        counts[prev[yy * width + xx] as usize] += 1;
                    }
                }
                let max = counts.iter().copied().max().unwrap_or(0);

                // Second scan in the same row-major order: the winner is
                // the first neighbor index whose count equals the maximum.
                'winner: for yy in y_lo..=y_hi {
                    for xx in x_lo..=x_hi {
                        let idx = prev[yy * width + xx];
                        if counts[idx as usize] == max {
                            *cell = idx;
                            break 'winner;
                        }
                    }
                }
            }
        });

        current = next;
    }

    IndexGrid::new(current, width, height)
}
