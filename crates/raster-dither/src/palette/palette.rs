//! Seven-color palette with a luminance-adaptive RGB distance.

use crate::color::Rgb8;

/// Number of entries in the palette.
pub const PALETTE_SIZE: usize = 7;

/// Named palette entries, in palette index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    /// `#38488d`
    Blue,
    /// `#547a49`
    Green,
    /// `#9f4b4e`
    Red,
    /// `#242933`
    Black,
    /// `#c9d168`
    Yellow,
    /// `#b55d4c`
    Orange,
    /// `#d3dde4`
    White,
}

impl PaletteColor {
    /// All entries in palette index order.
    pub const ALL: [PaletteColor; PALETTE_SIZE] = [
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Red,
        PaletteColor::Black,
        PaletteColor::Yellow,
        PaletteColor::Orange,
        PaletteColor::White,
    ];

    /// Position in the palette.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Entry at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Lowercase name of the entry.
    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Blue => "blue",
            PaletteColor::Green => "green",
            PaletteColor::Red => "red",
            PaletteColor::Black => "black",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Orange => "orange",
            PaletteColor::White => "white",
        }
    }

    /// RGB value of the entry.
    #[inline]
    pub fn rgb(self) -> Rgb8 {
        Palette::SEVEN_COLOR.get(self.index())
    }
}

/// Distance between `pixel` and `entry` with luminance-adaptive channel
/// weights.
///
/// With `r̂ = (pixel.r + entry.r) / 2` (truncated):
///
/// ```text
/// r̂ <  128:  sqrt(2·ΔR² + 4·ΔG² + 3·ΔB²)
/// r̂ >= 128:  sqrt(3·ΔR² + 4·ΔG² + 2·ΔB²)
/// ```
///
/// A cheap perceptual approximation; no color-space conversion is involved.
#[inline]
pub fn weighted_distance(pixel: Rgb8, entry: Rgb8) -> f32 {
    (weighted_distance_sq(pixel, entry) as f32).sqrt()
}

/// Squared form of [`weighted_distance`]; same ordering, exact integers.
#[inline]
fn weighted_distance_sq(pixel: Rgb8, entry: Rgb8) -> u32 {
    let dr = i32::from(pixel.r) - i32::from(entry.r);
    let dg = i32::from(pixel.g) - i32::from(entry.g);
    let db = i32::from(pixel.b) - i32::from(entry.b);
    let r_hat = (i32::from(pixel.r) + i32::from(entry.r)) / 2;

    let (wr, wb) = if r_hat < 128 { (2, 3) } else { (3, 2) };
    (wr * dr * dr + 4 * dg * dg + wb * db * db) as u32
}

/// The process-wide seven-color palette.
///
/// Entry 0 ([`PaletteColor::Blue`]) doubles as the fill for border pixels
/// in color dithering.
///
/// # Example
///
/// ```
/// use raster_dither::{Palette, PaletteColor, Rgb8};
///
/// let (index, distance) = Palette::SEVEN_COLOR.find_nearest(Rgb8::new(0x24, 0x29, 0x33));
/// assert_eq!(PaletteColor::from_index(index), Some(PaletteColor::Black));
/// assert_eq!(distance, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb8; PALETTE_SIZE],
}

impl Palette {
    /// The seven display colors, in [`PaletteColor`] order.
    pub const SEVEN_COLOR: Palette = Palette {
        colors: [
            Rgb8::from_hex(0x38488d),
            Rgb8::from_hex(0x547a49),
            Rgb8::from_hex(0x9f4b4e),
            Rgb8::from_hex(0x242933),
            Rgb8::from_hex(0xc9d168),
            Rgb8::from_hex(0xb55d4c),
            Rgb8::from_hex(0xd3dde4),
        ],
    };

    /// Color at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= PALETTE_SIZE`.
    #[inline]
    pub fn get(&self, idx: usize) -> Rgb8 {
        self.colors[idx]
    }

    /// All colors in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    /// Index of the closest entry under [`weighted_distance`], and that
    /// distance.
    ///
    /// Ties go to the lowest index.
    pub fn find_nearest(&self, pixel: Rgb8) -> (usize, f32) {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = weighted_distance_sq(pixel, entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, (best_dist as f32).sqrt())
    }
}
