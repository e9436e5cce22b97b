//! PNG input/output.
//!
//! Decoding normalizes every supported PNG layout (RGB, RGBA, grayscale,
//! grayscale+alpha, indexed) to a flat `[R, G, B]` pixel buffer; alpha is
//! dropped. Encoding goes through in-memory buffers so that a failure never
//! leaves a truncated file on disk.

use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use crate::error::AppError;

/// A decoded RGB raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub pixels: Vec<[u8; 3]>,
    pub width: usize,
    pub height: usize,
}

/// Decode a PNG file to an RGB raster.
///
/// 16-bit channels are truncated to 8 bits; indexed images are expanded
/// through their palette; alpha channels are dropped.
pub fn load_png(path: &Path) -> Result<Raster, AppError> {
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(file);
    // Expand indexed/low-bit-depth images and drop 16-bit precision so the
    // output of info() is always 8-bit RGB(A) or grayscale(+alpha).
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder.read_info()?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(AppError::UnsupportedFormat(format!(
            "bit depth {:?} after expansion",
            info.bit_depth
        )));
    }

    let width = info.width as usize;
    let height = info.height as usize;

    let pixels: Vec<[u8; 3]> = match info.color_type {
        png::ColorType::Rgb => buf.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect(),
        png::ColorType::Rgba => buf.chunks_exact(4).map(|c| [c[0], c[1], c[2]]).collect(),
        png::ColorType::Grayscale => buf.iter().map(|&v| [v, v, v]).collect(),
        png::ColorType::GrayscaleAlpha => {
            buf.chunks_exact(2).map(|c| [c[0], c[0], c[0]]).collect()
        }
        // EXPAND converts indexed to RGB before we get here
        other => {
            return Err(AppError::UnsupportedFormat(format!(
                "color type {other:?}"
            )));
        }
    };

    debug_assert_eq!(pixels.len(), width * height);
    Ok(Raster {
        pixels,
        width,
        height,
    })
}

/// Encode a flat RGB byte buffer as a PNG in memory.
pub fn encode_png(rgb: &[u8], width: usize, height: usize) -> Result<Vec<u8>, AppError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width as u32, height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(rgb)?;
    }
    Ok(buf.into_inner())
}

/// Write the cleaned raster and the diff overlay as a pair.
///
/// Both images are encoded to memory first, so encoding errors surface
/// before either path is touched. If writing the second file fails after
/// the first succeeded, the first is removed again: the pair appears
/// together or not at all.
pub fn write_output_pair(
    cleaned: (&[u8], &Path),
    diff: (&[u8], &Path),
    width: usize,
    height: usize,
) -> Result<(), AppError> {
    let cleaned_png = encode_png(cleaned.0, width, height)?;
    let diff_png = encode_png(diff.0, width, height)?;

    write_file(cleaned.1, &cleaned_png)?;
    if let Err(e) = write_file(diff.1, &diff_png) {
        let _ = std::fs::remove_file(cleaned.1);
        return Err(e);
    }
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn write_test_png(path: &Path, rgb: &[u8], width: usize, height: usize) {
        let bytes = encode_png(rgb, width, height).unwrap();
        std::fs::write(path, bytes).unwrap();
    }

    #[test]
    fn test_rgb_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        let rgb: Vec<u8> = (0..2 * 3 * 3).map(|i| (i * 11 % 256) as u8).collect();
        write_test_png(&path, &rgb, 3, 2);

        let raster = load_png(&path).unwrap();
        assert_eq!(raster.width, 3);
        assert_eq!(raster.height, 2);

        let flat: Vec<u8> = raster.pixels.iter().flatten().copied().collect();
        assert_eq!(flat, rgb);
    }

    #[test]
    fn test_rgba_alpha_dropped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rgba.png");

        let rgba = [10u8, 20, 30, 255, 40, 50, 60, 128];
        let bytes = {
            let mut buf = Cursor::new(Vec::new());
            {
                let mut encoder = png::Encoder::new(&mut buf, 2, 1);
                encoder.set_color(png::ColorType::Rgba);
                encoder.set_depth(png::BitDepth::Eight);
                let mut writer = encoder.write_header().unwrap();
                writer.write_image_data(&rgba).unwrap();
            }
            buf.into_inner()
        };
        std::fs::write(&path, bytes).unwrap();

        let raster = load_png(&path).unwrap();
        assert_eq!(raster.pixels, vec![[10, 20, 30], [40, 50, 60]]);
    }

    #[test]
    fn test_grayscale_replicated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gray.png");

        let gray = [0u8, 128, 255];
        let bytes = {
            let mut buf = Cursor::new(Vec::new());
            {
                let mut encoder = png::Encoder::new(&mut buf, 3, 1);
                encoder.set_color(png::ColorType::Grayscale);
                encoder.set_depth(png::BitDepth::Eight);
                let mut writer = encoder.write_header().unwrap();
                writer.write_image_data(&gray).unwrap();
            }
            buf.into_inner()
        };
        std::fs::write(&path, bytes).unwrap();

        let raster = load_png(&path).unwrap();
        assert_eq!(raster.pixels, vec![[0, 0, 0], [128, 128, 128], [255, 255, 255]]);
    }

    #[test]
    fn test_output_pair_written_together() {
        let dir = tempdir().unwrap();
        let clean_path = dir.path().join("clean.png");
        let diff_path = dir.path().join("diff.png");

        let rgb = [1u8, 2, 3, 4, 5, 6];
        write_output_pair((&rgb, &clean_path), (&rgb, &diff_path), 2, 1).unwrap();

        assert!(clean_path.exists());
        assert!(diff_path.exists());
        assert_eq!(load_png(&clean_path).unwrap(), load_png(&diff_path).unwrap());
    }

    #[test]
    fn test_output_pair_cleanup_on_second_failure() {
        let dir = tempdir().unwrap();
        let clean_path = dir.path().join("clean.png");
        // Parent directory of the diff path does not exist
        let diff_path = dir.path().join("missing").join("diff.png");

        let rgb = [1u8, 2, 3];
        let result = write_output_pair((&rgb, &clean_path), (&rgb, &diff_path), 1, 1);

        assert!(result.is_err());
        assert!(!clean_path.exists(), "first file must be removed on failure");
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = load_png(Path::new("/nonexistent/input.png"));
        assert!(result.is_err());
    }
}
