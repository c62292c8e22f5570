//! Floyd-Steinberg error diffusion dithering.
//!
//! Two ditherers implement the [`Dither`] trait:
//!
//! - [`Monochrome`]: grayscale to black/white (inverted polarity)
//! - [`SevenColor`]: RGB to the fixed [`Palette::SEVEN_COLOR`](crate::Palette::SEVEN_COLOR)
//!
//! Both walk the image row-major and add each pixel's quantization error
//! straight onto the samples of not-yet-visited neighbours; no separate
//! error buffer exists, so both run single-threaded.
//!
//! # Example
//!
//! ```
//! use raster_dither::{Dither, DitherAlgorithm, PixelBuffer};
//!
//! let input = PixelBuffer::filled(8, 8, &[120, 130, 140]).unwrap();
//! let output = DitherAlgorithm::SevenColor.ditherer().dither(&input);
//! assert_eq!(output.width(), 8);
//! ```

mod kernel;
mod monochrome;
mod residual;
mod seven_color;

use std::fmt;
use std::str::FromStr;

pub use kernel::{Kernel, FLOYD_STEINBERG};
pub use monochrome::{quantize, Monochrome, BLACK, THRESHOLD, WHITE};
pub use residual::Residual;
pub use seven_color::SevenColor;

use crate::bitmap::PixelBuffer;

/// Trait for error diffusion ditherers.
///
/// A ditherer reads one buffer and returns a new one; the input is left
/// untouched.
pub trait Dither {
    /// Dither `buffer`, returning a 3-channel result.
    fn dither(&self, buffer: &PixelBuffer) -> PixelBuffer;
}

/// Dither algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DitherAlgorithm {
    /// Black/white output, see [`Monochrome`].
    Monochrome,
    /// Seven-color palette output, see [`SevenColor`].
    SevenColor,
}

impl DitherAlgorithm {
    /// The ditherer implementing this algorithm.
    pub fn ditherer(self) -> &'static dyn Dither {
        match self {
            DitherAlgorithm::Monochrome => &Monochrome,
            DitherAlgorithm::SevenColor => &SevenColor,
        }
    }

    /// Short name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            DitherAlgorithm::Monochrome => "mono",
            DitherAlgorithm::SevenColor => "color",
        }
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dither algorithm '{0}' (expected 'mono' or 'color')")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for DitherAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mono" | "monochrome" => Ok(DitherAlgorithm::Monochrome),
            "color" | "colour" | "seven-color" => Ok(DitherAlgorithm::SevenColor),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Channels;

    #[test]
    fn test_algorithm_names_round_trip() {
        for algorithm in [DitherAlgorithm::Monochrome, DitherAlgorithm::SevenColor] {
            assert_eq!(algorithm.to_string().parse::<DitherAlgorithm>(), Ok(algorithm));
        }
        assert_eq!(
            "Colour".parse::<DitherAlgorithm>(),
            Ok(DitherAlgorithm::SevenColor)
        );
        assert!("atkinson".parse::<DitherAlgorithm>().is_err());
    }

    #[test]
    fn test_ditherer_dispatch() {
        let input = PixelBuffer::filled(4, 4, &[0]).unwrap();
        let mono = DitherAlgorithm::Monochrome.ditherer().dither(&input);
        let color = DitherAlgorithm::SevenColor.ditherer().dither(&input);
        assert_eq!(mono.channels(), Channels::Rgb);
        assert_eq!(color.channels(), Channels::Rgb);
        assert_ne!(mono, color);
    }

    #[test]
    fn test_dither_leaves_input_untouched() {
        let input = PixelBuffer::filled(5, 5, &[10, 200, 30]).unwrap();
        let before = input.clone();
        let _ = SevenColor.dither(&input);
        let _ = Monochrome.dither(&input);
        assert_eq!(input, before);
    }
}
