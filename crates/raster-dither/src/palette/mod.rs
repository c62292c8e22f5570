//! The fixed seven-color palette and its nearest-color search.

mod palette;

pub use palette::{weighted_distance, Palette, PaletteColor, PALETTE_SIZE};
