//! Grayscale reduction and gray-to-RGB replication.

use tracing::debug;

use crate::bitmap::{Channels, PixelBuffer};

/// Fast approximate luma: `(2R + 3G + B) / 6`, truncated.
///
/// Not a colorimetric standard.
#[inline]
pub fn fast_luminance(r: u8, g: u8, b: u8) -> u8 {
    ((2 * u32::from(r) + 3 * u32::from(g) + u32::from(b)) / 6) as u8
}

/// Unweighted channel mean: `(R + G + B) / 3`, truncated.
#[inline]
pub fn channel_mean(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) + u32::from(g) + u32::from(b)) / 3) as u8
}

impl PixelBuffer {
    /// Collapse to one channel using [`channel_mean`].
    ///
    /// A grayscale buffer is returned as a copy.
    pub fn to_grayscale(&self) -> PixelBuffer {
        if self.channels() == Channels::Gray {
            return self.clone();
        }
        debug!(width = self.width(), height = self.height(), "reducing to grayscale");
        let rows = self
            .rows()
            .iter()
            .map(|row| {
                row.chunks_exact(3)
                    .map(|p| channel_mean(p[0], p[1], p[2]))
                    .collect()
            })
            .collect();
        PixelBuffer::from_parts(rows, self.width(), Channels::Gray)
    }

    /// Replicate every gray sample into three identical RGB channels.
    ///
    /// An RGB buffer is returned as a copy.
    pub fn to_rgb(&self) -> PixelBuffer {
        if self.channels() == Channels::Rgb {
            return self.clone();
        }
        let rows = self
            .rows()
            .iter()
            .map(|row| row.iter().flat_map(|&v| [v, v, v]).collect())
            .collect();
        PixelBuffer::from_parts(rows, self.width(), Channels::Rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_mean_truncates() {
        assert_eq!(channel_mean(255, 255, 255), 255);
        assert_eq!(channel_mean(1, 1, 0), 0);
        assert_eq!(channel_mean(100, 50, 1), 50);
    }

    #[test]
    fn test_mean_and_luminance_differ() {
        // Mean: 255 / 3 = 85; luma: 2 * 255 / 6 = 85. Green tips them apart.
        assert_eq!(channel_mean(0, 255, 0), 85);
        assert_eq!(fast_luminance(0, 255, 0), 127);
    }

    #[test]
    fn test_to_grayscale_uses_mean() {
        let buffer =
            PixelBuffer::from_rows(vec![vec![30, 60, 90, 0, 255, 0]], Channels::Rgb).unwrap();
        let gray = buffer.to_grayscale();
        assert_eq!(gray.channels(), Channels::Gray);
        assert_eq!(gray.width(), 2);
        assert_eq!(gray.rows(), &[vec![60, 85]]);
    }

    #[test]
    fn test_to_grayscale_on_gray_is_copy() {
        let buffer = PixelBuffer::filled(2, 2, &[77]).unwrap();
        assert_eq!(buffer.to_grayscale(), buffer);
    }

    #[test]
    fn test_to_rgb_replicates() {
        let buffer = PixelBuffer::from_rows(vec![vec![0, 200]], Channels::Gray).unwrap();
        let rgb = buffer.to_rgb();
        assert_eq!(rgb.channels(), Channels::Rgb);
        assert_eq!(rgb.rows(), &[vec![0, 0, 0, 200, 200, 200]]);
    }
}
