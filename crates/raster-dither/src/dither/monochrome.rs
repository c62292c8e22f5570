//! Black/white Floyd-Steinberg dithering.

use tracing::debug;

use super::residual::{diffuse, Residual};
use super::{Dither, FLOYD_STEINBERG};
use crate::bitmap::PixelBuffer;

/// Sample written for "white" output pixels and forced onto borders.
pub const WHITE: u8 = 0xFF;
/// Sample written for "black" output pixels.
pub const BLACK: u8 = 0x00;

/// Quantization threshold: samples at or below it become [`WHITE`].
pub const THRESHOLD: u8 = 128;

/// Two-level quantizer with inverted polarity.
///
/// Samples `<= 128` map to white and brighter samples to black. The
/// inversion matches existing output.
#[inline]
pub fn quantize(sample: u8) -> u8 {
    if sample <= THRESHOLD {
        WHITE
    } else {
        BLACK
    }
}

/// Floyd-Steinberg dithering to a two-level image.
///
/// RGB input is first reduced with
/// [`to_grayscale`](PixelBuffer::to_grayscale). Pixels are visited
/// row-major, left to right, top to bottom:
///
/// - first column, last column and last row are forced to [`WHITE`]
///   without computing or spreading any error
/// - every other pixel is [`quantize`]d; its error, narrowed to a signed
///   byte, is spread with the Floyd-Steinberg kernel
///
/// The result is replicated into three identical channels, so the output
/// is always RGB with samples of only `0x00` or `0xFF`.
///
/// # Example
///
/// ```
/// use raster_dither::{Dither, Monochrome, PixelBuffer};
///
/// let input = PixelBuffer::filled(4, 3, &[0]).unwrap();
/// let output = Monochrome.dither(&input);
///
/// // Dark input turns white under the inverted polarity, with no residual.
/// assert!(output.to_raw().iter().all(|&v| v == 0xFF));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Monochrome;

impl Dither for Monochrome {
    fn dither(&self, buffer: &PixelBuffer) -> PixelBuffer {
        let mut gray = buffer.to_grayscale();
        let width = gray.width();
        let height = gray.height();
        debug!(width, height, "monochrome dither");

        let rows = gray.rows_mut();
        for y in 0..height {
            for x in 0..width {
                if x == 0 || x == width - 1 || y == height - 1 {
                    rows[y][x] = WHITE;
                    continue;
                }
                let old = rows[y][x];
                let new = quantize(old);
                diffuse(rows, x, y, 1, 0, Residual::wrapped(old, new), &FLOYD_STEINBERG);
                rows[y][x] = new;
            }
        }

        gray.to_rgb()
    }
}
