//! Error type for pixel buffer access and transforms.

use thiserror::Error;

/// Error type for [`PixelBuffer`](super::PixelBuffer) construction, access
/// and transforms.
///
/// Every variant except [`BitmapError::RaggedRows`],
/// [`BitmapError::UnsupportedChannels`], [`BitmapError::TooLarge`] and
/// [`BitmapError::Empty`] belongs to the out-of-range class: a coordinate, box or target size that does not
/// fit the buffer. Use [`BitmapError::is_out_of_range`] to classify.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitmapError {
    /// Pixel coordinate outside the buffer
    #[error("pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    PixelOutOfRange {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Buffer width in pixels
        width: usize,
        /// Buffer height in pixels
        height: usize,
    },

    /// Averaging box larger than the buffer in either dimension
    #[error("box size {box_size} does not fit the {width}x{height} buffer")]
    BoxTooLarge {
        /// Requested box edge length
        box_size: usize,
        /// Buffer width in pixels
        width: usize,
        /// Buffer height in pixels
        height: usize,
    },

    /// Averaging box with an edge length of zero
    #[error("box size cannot be zero")]
    ZeroBoxSize,

    /// Resample target width of zero
    #[error("new width cannot be zero")]
    ZeroWidth,

    /// A scanline whose length differs from the first one
    #[error("row {row} has {actual} bytes, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Channel count other than 1 (grayscale) or 3 (RGB)
    #[error("unsupported channel count {0} (expected 1 or 3)")]
    UnsupportedChannels(usize),

    /// Dimensions whose byte size does not fit in memory
    #[error("{width}x{height} buffer is too large")]
    TooLarge {
        /// Requested width in pixels
        width: usize,
        /// Requested height in pixels
        height: usize,
    },

    /// No rows, or rows without a single whole pixel
    #[error("pixel buffer cannot be empty")]
    Empty,
}

impl BitmapError {
    /// Whether this error reports a coordinate or size outside valid bounds.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            BitmapError::PixelOutOfRange { .. }
                | BitmapError::BoxTooLarge { .. }
                | BitmapError::ZeroBoxSize
                | BitmapError::ZeroWidth
        )
    }
}
