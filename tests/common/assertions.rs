//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use raster_dither::{Channels, PixelBuffer, PaletteColor};

/// Assert the buffer has the given dimensions
pub fn assert_dimensions(buffer: &PixelBuffer, width: usize, height: usize) {
    assert_eq!(
        (buffer.width(), buffer.height()),
        (width, height),
        "unexpected dimensions"
    );
}

/// Assert every pixel is pure black or pure white RGB
pub fn assert_two_level(buffer: &PixelBuffer) {
    assert_eq!(buffer.channels(), Channels::Rgb);
    for pixel in buffer.to_raw().chunks_exact(3) {
        assert!(
            pixel == [0, 0, 0] || pixel == [255, 255, 255],
            "expected black or white, got {pixel:?}"
        );
    }
}

/// Assert every pixel is one of the seven palette colors
pub fn assert_palette_only(buffer: &PixelBuffer) {
    assert_eq!(buffer.channels(), Channels::Rgb);
    for pixel in buffer.to_raw().chunks_exact(3) {
        assert!(
            PaletteColor::ALL
                .iter()
                .any(|c| c.rgb().to_bytes() == pixel),
            "{pixel:?} is not a palette color"
        );
    }
}

/// Assert bytes start with the given magic
pub fn assert_magic(bytes: &[u8], magic: &[u8]) {
    assert!(
        bytes.starts_with(magic),
        "expected magic {:?}, got {:?}",
        magic,
        &bytes[..magic.len().min(bytes.len())]
    );
}
