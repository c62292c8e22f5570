//! 8-bit RGB color triple

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb8 {
    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Read the first three samples of an interleaved RGB slice.
    ///
    /// # Panics
    ///
    /// Panics if `samples` holds fewer than three bytes.
    #[inline]
    pub fn from_slice(samples: &[u8]) -> Self {
        Self::new(samples[0], samples[1], samples[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = ParseColorError;

    /// Parse a color from `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`.
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// ```
    /// use raster_dither::Rgb8;
    ///
    /// let blue: Rgb8 = "#38488d".parse().unwrap();
    /// assert_eq!(blue, Rgb8::new(0x38, 0x48, 0x8d));
    ///
    /// let red: Rgb8 = "F00".parse().unwrap();
    /// assert_eq!(red, Rgb8::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_unpacks_channels() {
        assert_eq!(Rgb8::from_hex(0xb55d4c), Rgb8::new(0xb5, 0x5d, 0x4c));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let color = Rgb8::new(0xd3, 0xdd, 0xe4);
        assert_eq!(color.to_string(), "#d3dde4");
        assert_eq!(color.to_string().parse::<Rgb8>().unwrap(), color);
    }

    #[test]
    fn test_parse_shorthand_and_whitespace() {
        assert_eq!(" #0f0 ".parse::<Rgb8>().unwrap(), Rgb8::new(0, 255, 0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "#12345".parse::<Rgb8>().unwrap_err(),
            ParseColorError::InvalidLength
        );
        assert!(matches!(
            "#zzzzzz".parse::<Rgb8>().unwrap_err(),
            ParseColorError::InvalidHex(_)
        ));
        assert_eq!(
            "ééé".parse::<Rgb8>().unwrap_err(),
            ParseColorError::InvalidLength
        );
    }

    #[test]
    fn test_from_slice_reads_interleaved() {
        assert_eq!(Rgb8::from_slice(&[1, 2, 3, 4]), Rgb8::new(1, 2, 3));
    }
}
