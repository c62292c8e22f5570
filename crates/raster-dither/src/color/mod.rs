//! 8-bit color triples and channel reductions.
//!
//! Two distinct gray reductions live here and must not be unified:
//!
//! - [`fast_luminance`]: `(2R + 3G + B) / 6`, a cheap luma approximation
//!   used for single-pixel queries
//! - [`channel_mean`]: `(R + G + B) / 3`, the unweighted mean used by the
//!   grayscale reducer ([`PixelBuffer::to_grayscale`](crate::PixelBuffer::to_grayscale))

mod gray;
mod rgb;

pub use gray::{channel_mean, fast_luminance};
pub use rgb::{ParseColorError, Rgb8};
