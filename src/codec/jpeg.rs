//! JPEG decode/encode through the `image` crate.
//!
//! The codec is an opaque scanline source and sink: it yields width,
//! height, channel layout and raw rows, and accepts the same plus a
//! quality setting.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageFormat};
use raster_dither::{Channels, PixelBuffer};

use super::clamp_quality;
use crate::error::CodecError;

/// Decode JPEG bytes into a grayscale or RGB buffer.
///
/// Grayscale JPEGs stay single-channel; everything else is converted to
/// 8-bit RGB by the decoder.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer, CodecError> {
    let image = image::load_from_memory_with_format(bytes, ImageFormat::Jpeg)?;
    let width = image.width() as usize;
    let height = image.height() as usize;

    let buffer = if image.color().has_color() {
        PixelBuffer::from_raw(width, height, Channels::Rgb, &image.to_rgb8().into_raw())?
    } else {
        PixelBuffer::from_raw(width, height, Channels::Gray, &image.to_luma8().into_raw())?
    };
    Ok(buffer)
}

/// Encode `buffer` as baseline JPEG.
///
/// `quality` is clamped to `0..=100`; the encoder's floor of 1 applies to 0.
pub fn encode(buffer: &PixelBuffer, quality: i32) -> Result<Vec<u8>, CodecError> {
    let quality = clamp_quality(quality).max(1);
    let color_type = match buffer.channels() {
        Channels::Gray => ExtendedColorType::L8,
        Channels::Rgb => ExtendedColorType::Rgb8,
    };

    let mut out = Cursor::new(Vec::new());
    let mut encoder = JpegEncoder::new_with_quality(&mut out, quality);
    encoder.encode(
        &buffer.to_raw(),
        buffer.width() as u32,
        buffer.height() as u32,
        color_type,
    )?;
    tracing::debug!(quality, bytes = out.get_ref().len(), "Encoded JPEG");
    Ok(out.into_inner())
}
