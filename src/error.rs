use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read legend file {path}: {source}")]
    LegendRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse legend file {path}: {source}")]
    LegendParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Legend error: {0}")]
    Legend(#[from] legend_snap::PaletteError),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Unsupported PNG format: {0}")]
    UnsupportedFormat(String),

    #[error("Normalize error: {0}")]
    Normalize(#[from] legend_snap::NormalizeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
