//! raster-dither: in-memory resampling and Floyd-Steinberg dithering
//!
//! This library manipulates decoded raster images held entirely in memory:
//! box-filter downsampling, nearest-neighbour upsampling, grayscale
//! reduction, and error diffusion dithering to black/white or to a fixed
//! seven-color palette.
//!
//! # Quick Start
//!
//! ```
//! use raster_dither::{Dither, Monochrome, PixelBuffer};
//!
//! let mut buffer = PixelBuffer::filled(64, 48, &[200, 180, 90]).unwrap();
//! buffer.resize(32).unwrap();
//! assert_eq!((buffer.width(), buffer.height()), (32, 24));
//!
//! let dithered = Monochrome.dither(&buffer);
//! assert_eq!(dithered.channels().count(), 3);
//! ```
//!
//! # Buffers
//!
//! [`PixelBuffer`] stores one `Vec<u8>` per scanline with 1 (grayscale) or 3
//! (interleaved RGB) channels. Transforms either mutate the buffer in place
//! ([`resize`](PixelBuffer::resize), [`shrink`](PixelBuffer::shrink),
//! [`expand`](PixelBuffer::expand)) or return a new one
//! ([`to_grayscale`](PixelBuffer::to_grayscale), [`Dither::dither`]). A
//! failing transform returns an error before touching the buffer.
//!
//! # Rounding
//!
//! Everything here is integer arithmetic with truncation, and the
//! dithering error terms are truncated one by one and wrapped onto 8-bit
//! samples. See [`Residual`] for why that is kept.
//!
//! # Pipeline Overview
//!
//! ```text
//! decoded scanlines (codec)
//!     |
//!     v
//! PixelBuffer ---> resize (shrink: box filter / expand: nearest)
//!     |
//!     +---> to_grayscale ---> Monochrome  (0x00 / 0xFF, RGB out)
//!     |
//!     +---> SevenColor                    (palette colors, RGB out)
//!     |
//!     v
//! scanlines (codec)
//! ```

pub mod bitmap;
pub mod color;
pub mod dither;
pub mod palette;
pub mod resample;


pub use bitmap::{BitmapError, Channels, PixelBuffer};
pub use color::{channel_mean, fast_luminance, ParseColorError, Rgb8};
pub use dither::{Dither, DitherAlgorithm, Monochrome, Residual, SevenColor, UnknownAlgorithm};
pub use palette::{weighted_distance, Palette, PaletteColor};
