//! Codec boundary: JPEG, PPM and PNG files to and from [`PixelBuffer`].
//!
//! Format selection goes by file extension. Decoding supports JPEG and
//! binary PPM/PGM; encoding supports JPEG, PPM and PNG.

pub mod jpeg;
pub mod png;
pub mod ppm;

use std::fs;
use std::path::Path;

use raster_dither::{Channels, PixelBuffer};
use serde::Serialize;

use crate::error::CodecError;

/// File formats known to the codec layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Ppm,
    Png,
}

impl ImageFormat {
    /// Pick the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, CodecError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "ppm" | "pgm" | "pnm" => Ok(ImageFormat::Ppm),
            "png" => Ok(ImageFormat::Png),
            _ => Err(CodecError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Summary of a decoded image, printed by `rasterink info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub color_space: &'static str,
}

impl ImageInfo {
    pub fn of(buffer: &PixelBuffer) -> Self {
        Self {
            width: buffer.width(),
            height: buffer.height(),
            channels: buffer.channels().count(),
            color_space: match buffer.channels() {
                Channels::Gray => "grayscale",
                Channels::Rgb => "rgb",
            },
        }
    }
}

/// Clamp an encoder quality setting to `0..=100`.
pub fn clamp_quality(quality: i32) -> u8 {
    quality.clamp(0, 100) as u8
}

/// Read and decode an image file.
pub fn decode_file(path: &Path) -> Result<PixelBuffer, CodecError> {
    let format = ImageFormat::from_path(path)?;
    let bytes = fs::read(path).map_err(|source| CodecError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let buffer = match format {
        ImageFormat::Jpeg => jpeg::decode(&bytes)?,
        ImageFormat::Ppm => ppm::decode(&bytes)?,
        ImageFormat::Png => {
            return Err(CodecError::UnsupportedFormat(format!(
                "{} (PNG is output only)",
                path.display()
            )))
        }
    };
    tracing::info!(
        path = %path.display(),
        width = buffer.width(),
        height = buffer.height(),
        channels = buffer.channels().count(),
        "Decoded image"
    );
    Ok(buffer)
}

/// Encode `buffer` and write it to `path`.
///
/// `quality` only affects JPEG output and is clamped to `0..=100`.
pub fn encode_file(buffer: &PixelBuffer, path: &Path, quality: i32) -> Result<(), CodecError> {
    let bytes = match ImageFormat::from_path(path)? {
        ImageFormat::Jpeg => jpeg::encode(buffer, quality)?,
        ImageFormat::Ppm => ppm::encode(buffer),
        ImageFormat::Png => png::encode(buffer)?,
    };
    fs::write(path, &bytes).map_err(|source| CodecError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Wrote image");
    Ok(())
}
