//! Per-run summary statistics.

use crate::output::{DiffImage, NormalizedMap};

/// Statistics for one legend entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    /// The entry's 8-bit RGB color.
    pub rgb: [u8; 3],
    /// The entry's label.
    pub label: String,
    /// Pixels assigned to this entry in the final grid.
    pub count: usize,
}

/// Aggregate statistics for a normalization run.
///
/// Entry counts follow legend order and tally only pixels that were
/// actually remapped; over-threshold flagged pixels are excluded from the
/// per-entry breakdown and reported in [`flagged_count`](Self::flagged_count)
/// instead. Distance statistics cover every pixel, flagged or not.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Per-entry pixel counts, in legend order.
    pub entries: Vec<EntrySummary>,
    /// Mean delta-E over all pixels.
    pub mean_distance: f32,
    /// Maximum delta-E over all pixels.
    pub max_distance: f32,
    /// Pixels whose output RGB differs from the input.
    pub changed_count: usize,
    /// `changed_count` as a percentage of the raster.
    pub changed_percent: f64,
    /// Pixels flagged as over the distance threshold (0 when no threshold).
    pub flagged_count: usize,
    /// Total pixels in the raster.
    pub total_pixels: usize,
}

impl Summary {
    pub(crate) fn compute(map: &NormalizedMap, diff: &DiffImage) -> Self {
        let palette = map.palette();
        let mut counts = vec![0usize; palette.len()];
        let mut flagged_count = 0;

        for (i, &idx) in map.indices().as_slice().iter().enumerate() {
            match map.flagged() {
                Some(mask) if mask[i] => flagged_count += 1,
                _ => counts[idx as usize] += 1,
            }
        }

        let entries = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| EntrySummary {
                rgb: palette.rgb(i),
                label: palette.label(i).to_string(),
                count,
            })
            .collect();

        Summary {
            entries,
            mean_distance: map.distances().mean(),
            max_distance: map.distances().max(),
            changed_count: diff.changed_count(),
            changed_percent: diff.changed_percent(),
            flagged_count,
            total_pixels: map.width() * map.height(),
        }
    }
}
