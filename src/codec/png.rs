//! PNG output through the `png` crate.

use std::io::Cursor;

use raster_dither::{Channels, PixelBuffer};

use crate::error::CodecError;

/// Encode `buffer` as an 8-bit grayscale or RGB PNG.
pub fn encode(buffer: &PixelBuffer) -> Result<Vec<u8>, CodecError> {
    let color_type = match buffer.channels() {
        Channels::Gray => ::png::ColorType::Grayscale,
        Channels::Rgb => ::png::ColorType::Rgb,
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder =
            ::png::Encoder::new(&mut buf, buffer.width() as u32, buffer.height() as u32);
        encoder.set_color(color_type);
        encoder.set_depth(::png::BitDepth::Eight);
        encoder.set_compression(::png::Compression::Fast);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&buffer.to_raw())?;
    }
    Ok(buf.into_inner())
}
