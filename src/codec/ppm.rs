//! Binary PPM (P6) output and P5/P6 input.
//!
//! Output is always P6: a `"P6 {width} {height} 255\n"` header followed by
//! the raw scanlines. Grayscale buffers are replicated to RGB first.

use raster_dither::{Channels, PixelBuffer};

use crate::error::CodecError;

/// Encode `buffer` as P6 bytes.
pub fn encode(buffer: &PixelBuffer) -> Vec<u8> {
    let rgb = buffer.to_rgb();
    let header = format!("P6 {} {} 255\n", rgb.width(), rgb.height());
    let mut out = Vec::with_capacity(header.len() + rgb.stride() * rgb.height());
    out.extend_from_slice(header.as_bytes());
    for row in rgb.rows() {
        out.extend_from_slice(row);
    }
    out
}

/// Decode a binary PGM (P5) or PPM (P6) with a maxval of 255.
///
/// Header fields may be separated by any whitespace and interleaved with
/// `#` comments; exactly one whitespace byte precedes the pixel data.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer, CodecError> {
    let mut header = HeaderReader { bytes, pos: 0 };

    let channels = match header.token()? {
        b"P5" => Channels::Gray,
        b"P6" => Channels::Rgb,
        other => {
            return Err(CodecError::MalformedPpm(format!(
                "unsupported magic '{}'",
                String::from_utf8_lossy(other)
            )))
        }
    };
    let width = header.number("width")?;
    let height = header.number("height")?;
    let maxval = header.number("maxval")?;
    if maxval != 255 {
        return Err(CodecError::MalformedPpm(format!(
            "maxval {maxval} is not supported (expected 255)"
        )));
    }
    // single whitespace byte after maxval
    let data = bytes.get(header.pos + 1..).unwrap_or_default();

    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels.count()))
        .ok_or_else(|| {
            CodecError::MalformedPpm(format!("{width}x{height} image is too large"))
        })?;
    if data.len() < expected {
        return Err(CodecError::MalformedPpm(format!(
            "expected {expected} bytes of pixel data, found {}",
            data.len()
        )));
    }
    Ok(PixelBuffer::from_raw(
        width,
        height,
        channels,
        &data[..expected],
    )?)
}

/// Whitespace/comment-aware tokenizer over a PNM header.
struct HeaderReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> HeaderReader<'a> {
    fn skip_separators(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if b == b'#' {
                while self.bytes.get(self.pos).is_some_and(|&c| c != b'\n') {
                    self.pos += 1;
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn token(&mut self) -> Result<&'a [u8], CodecError> {
        self.skip_separators();
        let start = self.pos;
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| !b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(CodecError::MalformedPpm("truncated header".to_string()));
        }
        Ok(&self.bytes[start..self.pos])
    }

    fn number(&mut self, field: &str) -> Result<usize, CodecError> {
        let token = self.token()?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                CodecError::MalformedPpm(format!(
                    "invalid {field} '{}'",
                    String::from_utf8_lossy(token)
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_header_and_body() {
        let buffer =
            PixelBuffer::from_rows(vec![vec![1, 2, 3, 4, 5, 6]], Channels::Rgb).unwrap();
        let bytes = encode(&buffer);
        assert_eq!(&bytes[..11], b"P6 2 1 255\n");
        assert_eq!(&bytes[11..], &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_gray_is_written_as_rgb() {
        let buffer = PixelBuffer::from_rows(vec![vec![7, 200]], Channels::Gray).unwrap();
        let bytes = encode(&buffer);
        assert_eq!(&bytes[..11], b"P6 2 1 255\n");
        assert_eq!(&bytes[11..], &[7, 7, 7, 200, 200, 200]);
    }

    #[test]
    fn test_decode_own_output() {
        let buffer = PixelBuffer::from_rows(
            vec![vec![1, 2, 3, 4, 5, 6], vec![7, 8, 9, 10, 11, 12]],
            Channels::Rgb,
        )
        .unwrap();
        assert_eq!(decode(&encode(&buffer)).unwrap(), buffer);
    }

    #[test]
    fn test_decode_p5_with_comments() {
        let mut bytes = b"P5\n# made by hand\n3 1\n255\n".to_vec();
        bytes.extend_from_slice(&[10, 20, 30]);
        let buffer = decode(&bytes).unwrap();
        assert_eq!(buffer.channels(), Channels::Gray);
        assert_eq!(buffer.rows(), &[vec![10, 20, 30]]);
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert!(matches!(
            decode(b"P3 1 1 255\n1 2 3"),
            Err(CodecError::MalformedPpm(_))
        ));
        assert!(matches!(
            decode(b"P6 1 1 65535\n\0\0\0\0\0\0"),
            Err(CodecError::MalformedPpm(_))
        ));
        assert!(matches!(
            decode(b"P6 2 2 255\n\0\0\0"),
            Err(CodecError::MalformedPpm(_))
        ));
        assert!(matches!(decode(b"P6 2"), Err(CodecError::MalformedPpm(_))));
        assert!(matches!(
            decode(b"P6 x 2 255\n"),
            Err(CodecError::MalformedPpm(_))
        ));
    }

    #[test]
    fn test_decode_huge_dimensions_fails() {
        let max = usize::MAX;
        let header = format!("P6 {max} {max} 255\n");
        let mut bytes = header.into_bytes();
        bytes.extend_from_slice(&[0, 0, 0]);
        assert!(matches!(decode(&bytes), Err(CodecError::MalformedPpm(_))));

        let header = format!("P5 {max} 1 255\n");
        assert!(matches!(
            decode(header.as_bytes()),
            Err(CodecError::MalformedPpm(_))
        ));
    }

    #[test]
    fn test_decode_zero_dimensions_fails() {
        assert!(matches!(
            decode(b"P5 0 0 255\n"),
            Err(CodecError::Bitmap(_))
        ));
    }
}
