//! Width-driven resampling that preserves the aspect ratio.
//!
//! All dimension arithmetic uses the exact rational scale
//! `new_width / width` with truncating integer division, for both axes and
//! for every coordinate mapping. That keeps width and height consistent
//! and avoids the drift a rounded floating-point factor introduces on
//! large images.
//!
//! - [`PixelBuffer::shrink`]: box-filter downsample in a single pass
//! - [`PixelBuffer::expand`]: nearest-source upsample
//! - [`PixelBuffer::resize`]: dispatch on the requested width

mod expand;
mod shrink;

use crate::bitmap::{BitmapError, PixelBuffer};

/// Scale `length` by `new_width / width`, truncating.
#[inline]
pub(crate) fn scaled(length: usize, new_width: usize, width: usize) -> usize {
    length * new_width / width
}

impl PixelBuffer {
    /// Resample to `new_width`, shrinking or expanding as needed.
    ///
    /// No-op when the width already matches.
    pub fn resize(&mut self, new_width: usize) -> Result<(), BitmapError> {
        if new_width < self.width() {
            self.shrink(new_width)
        } else {
            self.expand(new_width);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bitmap::{Channels, PixelBuffer};

    #[test]
    fn test_resize_noop_same_width() {
        let mut buffer = PixelBuffer::filled(6, 4, &[1, 2, 3]).unwrap();
        let before = buffer.clone();
        buffer.resize(6).unwrap();
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_resize_dispatches_shrink() {
        let mut buffer = PixelBuffer::filled(8, 6, &[42]).unwrap();
        buffer.resize(4).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (4, 3));
    }

    #[test]
    fn test_resize_dispatches_expand() {
        let mut buffer = PixelBuffer::filled(4, 3, &[42]).unwrap();
        buffer.resize(8).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (8, 6));
    }

    #[test]
    fn test_resize_zero_width_fails_without_mutation() {
        let mut buffer = PixelBuffer::filled(4, 3, &[42]).unwrap();
        let before = buffer.clone();
        assert!(buffer.resize(0).unwrap_err().is_out_of_range());
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_round_trip_keeps_requested_width() {
        let rows = (0..7)
            .map(|y| (0..11).map(|x| (x * 20 + y) as u8).collect())
            .collect();
        let mut buffer = PixelBuffer::from_rows(rows, Channels::Gray).unwrap();

        buffer.resize(5).unwrap();
        assert_eq!(buffer.width(), 5);
        assert_eq!(buffer.height(), 7 * 5 / 11);

        buffer.resize(11).unwrap();
        assert_eq!(buffer.width(), 11);
        assert_eq!(buffer.height(), 3 * 11 / 5);
    }
}
