//! Legend palette with precomputed Lab coordinates and nearest-color matching.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::{Lab, LinearRgb, Srgb};

/// The fixed, ordered set of allowed output colors with labels.
///
/// A `Palette` is built once per run from the legend configuration and is
/// read-only thereafter. Entry order is user-significant: nearest-color
/// ties are broken in favor of the earlier entry, so reordering the legend
/// can change output on exactly-equidistant pixels.
///
/// # Precomputation
///
/// Each entry's CIE Lab coordinates are derived from its sRGB color at
/// construction time (never supplied independently), so per-pixel matching
/// does no palette-side conversion work.
///
/// # Example
///
/// ```
/// use legend_snap::Palette;
///
/// let palette = Palette::from_hex(&[
///     ("#00FF00", "grass"),
///     ("#0000FF", "water"),
///     ("#000000", "road"),
/// ]).unwrap();
///
/// assert_eq!(palette.len(), 3);
/// assert_eq!(palette.label(2), "road");
/// assert_eq!(palette.rgb(0), [0, 255, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    rgb: Vec<[u8; 3]>,
    srgb: Vec<Srgb>,
    lab: Vec<Lab>,
    labels: Vec<String>,
}

impl Palette {
    /// Maximum number of legend entries (indices are stored as `u8`).
    pub const MAX_COLORS: usize = 256;

    /// Create a palette from sRGB colors and labels, in legend order.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `entries` is empty
    /// - [`PaletteError::TooManyColors`] if there are more than
    ///   [`MAX_COLORS`](Self::MAX_COLORS) entries
    /// - [`PaletteError::DuplicateColor`] if two entries share the same
    ///   8-bit RGB value
    pub fn new(entries: &[(Srgb, &str)]) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if entries.len() > Self::MAX_COLORS {
            return Err(PaletteError::TooManyColors {
                count: entries.len(),
            });
        }

        let rgb: Vec<[u8; 3]> = entries.iter().map(|(c, _)| c.to_bytes()).collect();

        let mut seen = HashSet::new();
        for (i, bytes) in rgb.iter().enumerate() {
            if !seen.insert(*bytes) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        // Derive Srgb from the quantized bytes so that palette Lab values
        // match what classification computes for a pixel of the same color
        // (distance exactly 0 for exact legend pixels).
        let srgb: Vec<Srgb> = rgb.iter().map(|&b| Srgb::from_bytes(b)).collect();
        let lab: Vec<Lab> = srgb.iter().map(|&s| Lab::from(LinearRgb::from(s))).collect();
        let labels: Vec<String> = entries.iter().map(|(_, l)| l.to_string()).collect();

        Ok(Self {
            rgb,
            srgb,
            lab,
            labels,
        })
    }

    /// Create a palette from `(hex color, label)` pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use legend_snap::Palette;
    ///
    /// let palette = Palette::from_hex(&[("#000000", "road"), ("#808080", "building")]).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn from_hex(entries: &[(&str, &str)]) -> Result<Self, PaletteError> {
        let parsed: Vec<(Srgb, &str)> = entries
            .iter()
            .map(|&(hex, label)| {
                Srgb::from_str(hex)
                    .map(|c| (c, label))
                    .map_err(PaletteError::ParseColor)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&parsed)
    }

    /// Number of legend entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.rgb.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rgb.is_empty()
    }

    /// The 8-bit RGB color of the entry at `idx`.
    #[inline]
    pub fn rgb(&self, idx: usize) -> [u8; 3] {
        self.rgb[idx]
    }

    /// The entry at `idx` as an [`Srgb`] value.
    #[inline]
    pub fn srgb(&self, idx: usize) -> Srgb {
        self.srgb[idx]
    }

    /// The precomputed Lab coordinates of the entry at `idx`.
    #[inline]
    pub fn lab(&self, idx: usize) -> Lab {
        self.lab[idx]
    }

    /// The label of the entry at `idx`.
    #[inline]
    pub fn label(&self, idx: usize) -> &str {
        &self.labels[idx]
    }

    /// Find the nearest legend entry to the given Lab color.
    ///
    /// Linear scan in legend order with strict `<` comparison, so the
    /// **first** entry achieving the minimum distance wins. This tie-break
    /// is a contract: it keeps output deterministic and makes legend order
    /// meaningful for exactly-equidistant pixels. A spatial index may
    /// replace the scan only if it preserves these semantics exactly.
    ///
    /// Returns `(index, delta_e)`.
    ///
    /// # Example
    ///
    /// ```
    /// use legend_snap::{Lab, LinearRgb, Palette, Srgb};
    ///
    /// let palette = Palette::from_hex(&[("#000000", "road"), ("#00FF00", "grass")]).unwrap();
    ///
    /// let near_black = Lab::from(LinearRgb::from(Srgb::from_u8(16, 16, 16)));
    /// let (idx, dist) = palette.find_nearest(near_black);
    /// assert_eq!(idx, 0);
    /// assert!(dist > 0.0);
    /// ```
    #[inline]
    pub fn find_nearest(&self, color: Lab) -> (usize, f32) {
        // Linear scan; legends are small (10-20 entries) so this beats any
        // index structure on setup cost alone.
        let mut best_idx = 0;
        let mut best_dist = f32::MAX;

        for (i, &entry) in self.lab.iter().enumerate() {
            let dist = color.distance(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }
}
