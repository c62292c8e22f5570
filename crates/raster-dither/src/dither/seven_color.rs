//! Seven-color palette Floyd-Steinberg dithering.

use tracing::debug;

use super::residual::{diffuse, Residual};
use super::{Dither, FLOYD_STEINBERG};
use crate::bitmap::PixelBuffer;
use crate::color::Rgb8;
use crate::palette::Palette;

/// Floyd-Steinberg dithering against [`Palette::SEVEN_COLOR`].
///
/// Grayscale input is replicated to RGB first. Pixels are visited
/// row-major:
///
/// - first column, last column and last row are set to palette entry 0
///   without computing or spreading any error
/// - every other pixel takes its nearest entry under
///   [`weighted_distance`](crate::palette::weighted_distance); the
///   per-channel error `old - chosen` is spread with the Floyd-Steinberg
///   kernel, each channel independently
///
/// The output is always RGB and holds only palette colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct SevenColor;

impl Dither for SevenColor {
    fn dither(&self, buffer: &PixelBuffer) -> PixelBuffer {
        let palette = Palette::SEVEN_COLOR;
        let fallback = palette.get(0).to_bytes();

        let mut out = buffer.to_rgb();
        let width = out.width();
        let height = out.height();
        debug!(width, height, "seven-color dither");

        let rows = out.rows_mut();
        for y in 0..height {
            for x in 0..width {
                let base = x * 3;
                if x == 0 || x == width - 1 || y == height - 1 {
                    rows[y][base..base + 3].copy_from_slice(&fallback);
                    continue;
                }
                let pixel = Rgb8::from_slice(&rows[y][base..base + 3]);
                let old = pixel.to_bytes();
                let (idx, _) = palette.find_nearest(pixel);
                let chosen = palette.get(idx).to_bytes();
                for c in 0..3 {
                    let residual = Residual::between(old[c], chosen[c]);
                    diffuse(rows, x, y, 3, c, residual, &FLOYD_STEINBERG);
                }
                rows[y][base..base + 3].copy_from_slice(&chosen);
            }
        }

        out
    }
}
