//! Quantization residual with legacy per-term rounding.
//!
//! The arithmetic is fixed to keep output bit-identical:
//!
//! - each neighbour's share is `error * weight / divisor`, truncated toward
//!   zero on its own (never one combined division)
//! - shares are added straight onto the 8-bit samples with modulo-256
//!   wrap-around, not clamping

use super::Kernel;

/// Signed quantization error of one channel of one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Residual(i16);

impl Residual {
    /// Full-range residual `old - new` in `-255..=255`.
    #[inline]
    pub fn between(old: u8, new: u8) -> Self {
        Self(i16::from(old) - i16::from(new))
    }

    /// Residual narrowed to a signed byte: `old - new` wrapped into
    /// `-128..=127`.
    #[inline]
    pub fn wrapped(old: u8, new: u8) -> Self {
        Self(i16::from(old.wrapping_sub(new) as i8))
    }

    /// Raw error value.
    #[inline]
    pub fn value(self) -> i16 {
        self.0
    }

    /// Share of this residual for one kernel weight, truncated toward zero.
    #[inline]
    pub fn share(self, weight: u8, divisor: u8) -> i16 {
        self.0 * i16::from(weight) / i16::from(divisor)
    }

    /// Add this residual's share onto `sample`, wrapping modulo 256.
    #[inline]
    pub fn spread_onto(self, sample: u8, weight: u8, divisor: u8) -> u8 {
        (i16::from(sample) + self.share(weight, divisor)) as u8
    }
}

/// Diffuse `residual` from pixel `(x, y)` into its kernel neighbours.
///
/// `channels` is the sample count per pixel and `channel` the sample being
/// diffused. All neighbours must lie inside `rows`; callers only diffuse
/// from interior pixels.
pub(crate) fn diffuse(
    rows: &mut [Vec<u8>],
    x: usize,
    y: usize,
    channels: usize,
    channel: usize,
    residual: Residual,
    kernel: &Kernel,
) {
    if residual.value() == 0 {
        return;
    }
    for &(dx, dy, weight) in kernel.entries {
        let nx = x as isize + dx as isize;
        debug_assert!(nx >= 0, "diffusion target left of the buffer");
        let cell = &mut rows[y + dy as usize][nx as usize * channels + channel];
        *cell = residual.spread_onto(*cell, weight, kernel.divisor);
    }
}
