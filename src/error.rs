use std::path::PathBuf;

use raster_dither::BitmapError;
use thiserror::Error;

/// Failures at the codec and file boundary.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Could not open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open {path} for writing: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JPEG codec error: {0}")]
    Jpeg(#[from] image::ImageError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Malformed PPM: {0}")]
    MalformedPpm(String),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Bitmap error: {0}")]
    Bitmap(#[from] BitmapError),
}

/// Failures loading a pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}
