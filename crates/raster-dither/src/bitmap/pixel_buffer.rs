//! PixelBuffer: owned scanlines with bounds-checked access.

use super::BitmapError;

/// Number of interleaved samples per pixel.
///
/// Doubles as the color-space tag handed to encoders: a buffer is either
/// grayscale or RGB, never anything in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channels {
    /// One luma sample per pixel
    Gray,
    /// Interleaved R, G, B samples
    Rgb,
}

impl Channels {
    /// Samples per pixel (1 or 3).
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }

    /// Map a decoder's component count to a channel layout.
    pub fn from_count(count: usize) -> Result<Self, BitmapError> {
        match count {
            1 => Ok(Channels::Gray),
            3 => Ok(Channels::Rgb),
            n => Err(BitmapError::UnsupportedChannels(n)),
        }
    }
}

/// A 2D grid of 8-bit samples stored as one `Vec<u8>` per scanline.
///
/// Each row holds `width * channels` bytes; all rows have the same length
/// and there is at least one pixel. Cloning copies every row.
///
/// # Example
///
/// ```
/// use raster_dither::{Channels, PixelBuffer};
///
/// let buffer = PixelBuffer::from_rows(
///     vec![vec![10, 20, 30, 40, 50, 60]],
///     Channels::Rgb,
/// ).unwrap();
///
/// assert_eq!(buffer.width(), 2);
/// assert_eq!(buffer.get(1, 0).unwrap(), &[40, 50, 60]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    rows: Vec<Vec<u8>>,
    width: usize,
    channels: Channels,
}

impl PixelBuffer {
    /// Build a buffer from scanlines, validating their shape.
    pub fn from_rows(rows: Vec<Vec<u8>>, channels: Channels) -> Result<Self, BitmapError> {
        let stride = rows.first().map(Vec::len).ok_or(BitmapError::Empty)?;
        if stride == 0 {
            return Err(BitmapError::Empty);
        }
        if stride % channels.count() != 0 {
            return Err(BitmapError::RaggedRows {
                row: 0,
                expected: stride - stride % channels.count(),
                actual: stride,
            });
        }
        if let Some((row, line)) = rows.iter().enumerate().find(|(_, r)| r.len() != stride) {
            return Err(BitmapError::RaggedRows {
                row,
                expected: stride,
                actual: line.len(),
            });
        }
        Ok(Self {
            width: stride / channels.count(),
            rows,
            channels,
        })
    }

    /// Build a buffer from one contiguous block of scanlines, as produced by
    /// a codec.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: Channels,
        data: &[u8],
    ) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::Empty);
        }
        let (stride, total) = width
            .checked_mul(channels.count())
            .and_then(|stride| Some((stride, stride.checked_mul(height)?)))
            .ok_or(BitmapError::TooLarge { width, height })?;
        if data.len() != total {
            return Err(BitmapError::RaggedRows {
                row: data.len() / stride,
                expected: stride,
                actual: data.len() % stride,
            });
        }
        Self::from_rows(
            data.chunks_exact(stride).map(<[u8]>::to_vec).collect(),
            channels,
        )
    }

    /// A buffer where every pixel holds `pixel`.
    ///
    /// The channel layout follows the pixel's length (1 or 3).
    pub fn filled(width: usize, height: usize, pixel: &[u8]) -> Result<Self, BitmapError> {
        let channels = Channels::from_count(pixel.len())?;
        if width == 0 || height == 0 {
            return Err(BitmapError::Empty);
        }
        let row = pixel.repeat(width);
        Ok(Self {
            rows: vec![row; height],
            width,
            channels,
        })
    }

    /// Assemble a buffer from rows a transform already shaped correctly.
    pub(crate) fn from_parts(rows: Vec<Vec<u8>>, width: usize, channels: Channels) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|r| r.len() == width * channels.count()));
        Self {
            rows,
            width,
            channels,
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels (number of scanlines).
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Bytes per scanline.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width * self.channels.count()
    }

    /// All scanlines, top to bottom.
    #[inline]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    #[inline]
    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<u8>] {
        &mut self.rows
    }

    /// Consume the buffer, returning its scanlines.
    pub fn into_rows(self) -> Vec<Vec<u8>> {
        self.rows
    }

    /// Concatenate all scanlines into one contiguous block.
    pub fn to_raw(&self) -> Vec<u8> {
        self.rows.concat()
    }

    /// Samples of the pixel at `(x, y)`: exactly `channels().count()` bytes.
    pub fn get(&self, x: usize, y: usize) -> Result<&[u8], BitmapError> {
        if x >= self.width || y >= self.height() {
            return Err(BitmapError::PixelOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height(),
            });
        }
        let n = self.channels.count();
        Ok(&self.rows[y][x * n..(x + 1) * n])
    }

    /// Approximate luma of the pixel at `(x, y)`.
    ///
    /// Grayscale samples are returned as-is; RGB uses the integer
    /// approximation `(2R + 3G + B) / 6`. This is not the mean used by
    /// [`to_grayscale`](Self::to_grayscale).
    pub fn luminance(&self, x: usize, y: usize) -> Result<u8, BitmapError> {
        let pixel = self.get(x, y)?;
        Ok(match *pixel {
            [r, g, b] => crate::color::fast_luminance(r, g, b),
            [v] => v,
            _ => unreachable!("pixel length always matches the channel count"),
        })
    }

    /// Mean of the `box_size`×`box_size` block anchored at `(x, y)`.
    ///
    /// An anchor that would push the box past the right or bottom edge is
    /// moved left/up until the box fits. Fails when the box is larger than
    /// the buffer in either dimension.
    pub fn average(&self, x: usize, y: usize, box_size: usize) -> Result<Vec<u8>, BitmapError> {
        if box_size == 0 {
            return Err(BitmapError::ZeroBoxSize);
        }
        if box_size > self.width || box_size > self.height() {
            return Err(BitmapError::BoxTooLarge {
                box_size,
                width: self.width,
                height: self.height(),
            });
        }
        let x = x.min(self.width - box_size);
        let y = y.min(self.height() - box_size);

        let n = self.channels.count();
        let mut totals = vec![0u64; n];
        for row in &self.rows[y..y + box_size] {
            for pixel in row[x * n..(x + box_size) * n].chunks_exact(n) {
                for (total, &sample) in totals.iter_mut().zip(pixel) {
                    *total += u64::from(sample);
                }
            }
        }
        let area = (box_size * box_size) as u64;
        Ok(totals.into_iter().map(|t| (t / area) as u8).collect())
    }

    /// Keep the left half of every row and paint the right half with a
    /// marker (white for grayscale, pure red for RGB).
    ///
    /// Handy for eyeballing codec round trips: the untouched half must
    /// survive encode/decode while the marker half shows the encoder's
    /// handling of flat color.
    pub fn mark_right_half(&mut self) {
        let marker: &[u8] = match self.channels {
            Channels::Gray => &[0xFF],
            Channels::Rgb => &[0xFF, 0x00, 0x00],
        };
        let n = self.channels.count();
        let keep = self.width / 2;
        for row in &mut self.rows {
            for pixel in row[keep * n..].chunks_exact_mut(n) {
                pixel.copy_from_slice(marker);
            }
        }
    }
}
