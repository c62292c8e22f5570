//! In-memory pixel buffer and its error type.
//!
//! [`PixelBuffer`] owns a grid of scanlines with 1 (grayscale) or 3 (RGB)
//! interleaved channels. Transforms elsewhere in the crate replace a
//! buffer's rows wholesale; nothing here shares storage between buffers.

mod error;
mod pixel_buffer;

pub use error::BitmapError;
pub use pixel_buffer::{Channels, PixelBuffer};
