//! Test fixtures: synthetic images and scratch files.

use std::path::PathBuf;

use raster_dither::{Channels, PixelBuffer};
use tempfile::TempDir;

/// RGB gradient: red ramps left to right, green top to bottom.
pub fn gradient_rgb(width: usize, height: usize) -> PixelBuffer {
    let rows = (0..height)
        .map(|y| {
            (0..width)
                .flat_map(|x| {
                    let r = (x * 255 / (width.max(2) - 1)) as u8;
                    let g = (y * 255 / (height.max(2) - 1)) as u8;
                    [r, g, 128]
                })
                .collect()
        })
        .collect();
    PixelBuffer::from_rows(rows, Channels::Rgb).unwrap()
}

/// Uniform grayscale image.
pub fn flat_gray(width: usize, height: usize, value: u8) -> PixelBuffer {
    PixelBuffer::filled(width, height, &[value]).unwrap()
}

/// Scratch directory that is removed when dropped.
pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `buffer` as PPM under `name` and return its path.
    pub fn write_ppm(&self, name: &str, buffer: &PixelBuffer) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, rasterink::codec::ppm::encode(buffer)).unwrap();
        path
    }

    /// Write a YAML pipeline config under `name` and return its path.
    pub fn write_config(&self, name: &str, yaml: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, yaml).unwrap();
        path
    }
}
