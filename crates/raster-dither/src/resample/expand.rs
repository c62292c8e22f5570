//! Nearest-source upsampling.

use tracing::debug;

use super::scaled;
use crate::bitmap::PixelBuffer;

impl PixelBuffer {
    /// Nearest-neighbour upsample to `new_width`, keeping the aspect ratio.
    ///
    /// No-op when `new_width <= width`. Destination pixel `(x, y)` copies
    /// source pixel `(x * width / new_width, y * width / new_width)`; no
    /// interpolation takes place.
    pub fn expand(&mut self, new_width: usize) {
        let width = self.width();
        if new_width <= width {
            return;
        }

        let height = self.height();
        let new_height = scaled(height, new_width, width);
        let n = self.channels().count();
        debug!(width, height, new_width, new_height, "expanding");

        let source_offsets: Vec<usize> = (0..new_width)
            .map(|x| scaled(x, width, new_width) * n)
            .collect();

        let rows = (0..new_height)
            .map(|y| {
                let source = &self.rows()[scaled(y, width, new_width)];
                let mut line = Vec::with_capacity(new_width * n);
                for &offset in &source_offsets {
                    line.extend_from_slice(&source[offset..offset + n]);
                }
                line
            })
            .collect();

        *self = PixelBuffer::from_parts(rows, new_width, self.channels());
    }
}
