//! rasterink - resize and dither images for e-ink panels
//!
//! Decodes JPEG/PPM files into [`raster_dither::PixelBuffer`]s, runs a
//! configurable pipeline of resampling and dithering steps, and encodes the
//! result. This library exposes modules for integration testing.

pub mod codec;
pub mod config;
pub mod error;
pub mod pipeline;
