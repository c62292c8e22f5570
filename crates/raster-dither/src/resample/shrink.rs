//! Single-pass box-filter downsampling.

use tracing::debug;

use super::scaled;
use crate::bitmap::{BitmapError, PixelBuffer};

/// Per-destination-sample running sums for the row being built.
struct RowAccumulator {
    totals: Vec<u64>,
    counts: Vec<u64>,
}

impl RowAccumulator {
    fn new(stride: usize) -> Self {
        Self {
            totals: vec![0; stride],
            counts: vec![0; stride],
        }
    }

    #[inline]
    fn add(&mut self, index: usize, sample: u8) {
        self.totals[index] += u64::from(sample);
        self.counts[index] += 1;
    }

    /// Emit the averaged row and reset for the next one.
    fn flush(&mut self) -> Vec<u8> {
        let row = self
            .totals
            .iter()
            .zip(&self.counts)
            .map(|(&total, &count)| (total / count.max(1)) as u8)
            .collect();
        self.totals.fill(0);
        self.counts.fill(0);
        row
    }
}

impl PixelBuffer {
    /// Box-filter downsample to `new_width`, keeping the aspect ratio.
    ///
    /// No-op when `new_width >= width`. The new height is
    /// `height * new_width / width` (truncated, at least one row).
    ///
    /// The source is walked once in storage order. Every source pixel adds
    /// into the destination column it maps to; when the destination row
    /// index advances, the accumulated averages are emitted as one output
    /// row. Each scanline is read exactly once.
    pub fn shrink(&mut self, new_width: usize) -> Result<(), BitmapError> {
        let width = self.width();
        if new_width >= width {
            return Ok(());
        }
        if new_width == 0 {
            return Err(BitmapError::ZeroWidth);
        }

        let height = self.height();
        let new_height = scaled(height, new_width, width).max(1);
        let n = self.channels().count();
        debug!(width, height, new_width, new_height, "shrinking");

        let column_map: Vec<usize> = (0..width)
            .map(|x| scaled(x, new_width, width) * n)
            .collect();

        let mut acc = RowAccumulator::new(new_width * n);
        let mut rows = Vec::with_capacity(new_height);
        let mut current_row = 0;
        for (y, line) in self.rows().iter().enumerate() {
            // Trailing source rows past the last full destination row fold
            // into that row rather than producing a partial extra one.
            let dest_row = scaled(y, new_width, width).min(new_height - 1);
            if dest_row > current_row {
                rows.push(acc.flush());
                current_row = dest_row;
            }
            for (pixel, &base) in line.chunks_exact(n).zip(&column_map) {
                for (c, &sample) in pixel.iter().enumerate() {
                    acc.add(base + c, sample);
                }
            }
        }
        rows.push(acc.flush());

        *self = PixelBuffer::from_parts(rows, new_width, self.channels());
        Ok(())
    }
}
