//! End-to-end pipeline test: PNG on disk in, cleaned PNG + diff out.

use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::tempdir;

use legend_snap::{LegendNormalizer, NormalizeOptions};
use mapwash::config::LegendConfig;
use mapwash::raster;

fn write_png(path: &Path, pixels: &[[u8; 3]], width: usize, height: usize) {
    let flat: Vec<u8> = pixels.iter().flatten().copied().collect();
    let bytes = raster::encode_png(&flat, width, height).unwrap();
    std::fs::write(path, bytes).unwrap();
}

#[test]
fn test_noisy_map_file_round_trip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("map.png");
    let output = dir.path().join("map_clean.png");
    let diff_path = dir.path().join("map_diff.png");

    // 8x8 noisy map: left half grass-ish, right half water-ish, one dark
    // speckle in each half.
    let mut pixels = Vec::with_capacity(64);
    for y in 0..8 {
        for x in 0..8 {
            let noise = ((x * 13 + y * 7) % 12) as u8;
            if x < 4 {
                pixels.push([noise, 250 - noise, noise]);
            } else {
                pixels.push([noise, noise, 250 - noise]);
            }
        }
    }
    pixels[9] = [40, 40, 40]; // (1, 1)
    pixels[54] = [40, 40, 40]; // (6, 6)

    write_png(&input, &pixels, 8, 8);

    // Run the same pipeline main() drives: built-in legend, default knobs.
    let palette = LegendConfig::load(None).unwrap().to_palette().unwrap();
    let raster_in = raster::load_png(&input).unwrap();
    assert_eq!((raster_in.width, raster_in.height), (8, 8));

    let map = LegendNormalizer::new(palette)
        .options(NormalizeOptions::new().median_window(3).mode_iterations(2))
        .normalize(&raster_in.pixels, 8, 8)
        .unwrap();

    let cleaned = map.to_rgb();
    let diff = map.diff();
    raster::write_output_pair(
        (&cleaned, &output),
        (diff.pixels(), &diff_path),
        8,
        8,
    )
    .unwrap();

    // The cleaned file decodes to exactly two legend colors, speckles gone.
    let cleaned_file = raster::load_png(&output).unwrap();
    for (i, &rgb) in cleaned_file.pixels.iter().enumerate() {
        let x = i % 8;
        let expected = if x < 4 { [0, 255, 0] } else { [0, 0, 255] };
        assert_eq!(rgb, expected, "pixel ({}, {})", x, i / 8);
    }

    // The diff file decodes and marks every pixel (all inputs were noisy).
    let diff_file = raster::load_png(&diff_path).unwrap();
    assert_eq!(diff_file.width, 8);
    let red_count = diff_file
        .pixels
        .iter()
        .filter(|&&p| p == [255, 0, 0])
        .count();
    assert_eq!(red_count, diff.changed_count());
    assert_eq!(diff.changed_count(), 64);
}

#[test]
fn test_already_clean_map_is_identity() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("clean_in.png");
    let output = dir.path().join("clean_out.png");
    let diff_path = dir.path().join("diff.png");

    // A 4x4 checkerboard of exact legend colors.
    let pixels: Vec<[u8; 3]> = (0..16)
        .map(|i| if (i + i / 4) % 2 == 0 { [0, 255, 0] } else { [0, 0, 0] })
        .collect();
    write_png(&input, &pixels, 4, 4);

    let palette = LegendConfig::load(None).unwrap().to_palette().unwrap();
    let raster_in = raster::load_png(&input).unwrap();
    let map = LegendNormalizer::new(palette)
        .normalize(&raster_in.pixels, 4, 4)
        .unwrap();

    let cleaned = map.to_rgb();
    let diff = map.diff();
    let summary = map.summary(&diff);
    assert_eq!(summary.changed_count, 0);
    assert_eq!(summary.max_distance, 0.0);

    raster::write_output_pair(
        (&cleaned, &output),
        (diff.pixels(), &diff_path),
        4,
        4,
    )
    .unwrap();

    assert_eq!(raster::load_png(&output).unwrap().pixels, pixels);
    assert_eq!(raster::load_png(&diff_path).unwrap().pixels, pixels);
}

#[test]
fn test_custom_legend_file() {
    let dir = tempdir().unwrap();
    let legend_path = dir.path().join("legend.yaml");
    std::fs::write(
        &legend_path,
        r##"
legend:
  - color: "#FFFFFF"
    label: snow
  - color: "#000000"
    label: rock
"##,
    )
    .unwrap();

    let config = LegendConfig::load(Some(&legend_path)).unwrap();
    let palette = config.to_palette().unwrap();
    assert_eq!(palette.len(), 2);
    assert_eq!(palette.label(0), "snow");

    let pixels = vec![[240u8, 240, 240], [20, 20, 20]];
    let map = LegendNormalizer::new(palette)
        .normalize(&pixels, 2, 1)
        .unwrap();
    assert_eq!(map.to_rgb(), vec![255, 255, 255, 0, 0, 0]);
}
