//! Ordered processing steps applied to a decoded buffer.

use clap::ValueEnum;
use raster_dither::{BitmapError, DitherAlgorithm, PixelBuffer};
use serde::{Deserialize, Serialize};

/// Dither mode as written in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DitherMode {
    /// Black/white output
    Mono,
    /// Seven-color palette output
    Color,
}

impl From<DitherMode> for DitherAlgorithm {
    fn from(mode: DitherMode) -> Self {
        match mode {
            DitherMode::Mono => DitherAlgorithm::Monochrome,
            DitherMode::Color => DitherAlgorithm::SevenColor,
        }
    }
}

/// Output mode chosen on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Keep colors as decoded
    #[default]
    None,
    /// Grayscale reduction only
    Gray,
    /// Grayscale, then black/white dithering
    Mono,
    /// Seven-color palette dithering
    Color,
}

impl OutputMode {
    /// Steps implementing this mode.
    pub fn steps(self) -> Vec<Step> {
        match self {
            OutputMode::None => Vec::new(),
            OutputMode::Gray => vec![Step::Grayscale],
            OutputMode::Mono => vec![
                Step::Grayscale,
                Step::Dither {
                    algorithm: DitherMode::Mono,
                },
            ],
            OutputMode::Color => vec![Step::Dither {
                algorithm: DitherMode::Color,
            }],
        }
    }
}

/// One processing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Shrink or expand to `width`, keeping the aspect ratio
    Resize { width: usize },
    /// Box-filter downsample; no-op unless narrower
    Shrink { width: usize },
    /// Nearest-neighbour upsample; no-op unless wider
    Expand { width: usize },
    /// Collapse RGB to one channel
    Grayscale,
    /// Error diffusion dithering
    Dither { algorithm: DitherMode },
    /// Paint the right half with a marker color
    MarkRightHalf,
}

impl Step {
    /// Apply this step to `buffer`. On error the buffer is unchanged.
    pub fn apply(&self, buffer: &mut PixelBuffer) -> Result<(), BitmapError> {
        match *self {
            Step::Resize { width } => buffer.resize(width)?,
            Step::Shrink { width } => buffer.shrink(width)?,
            Step::Expand { width } => buffer.expand(width),
            Step::Grayscale => *buffer = buffer.to_grayscale(),
            Step::Dither { algorithm } => {
                *buffer = DitherAlgorithm::from(algorithm).ditherer().dither(buffer)
            }
            Step::MarkRightHalf => buffer.mark_right_half(),
        }
        Ok(())
    }
}

/// An ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Append a step.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Append an optional resize followed by the steps of `mode`.
    pub fn with_options(mut self, width: Option<usize>, mode: OutputMode) -> Self {
        if let Some(width) = width {
            self.push(Step::Resize { width });
        }
        self.steps.extend(mode.steps());
        self
    }

    /// Run every step in order, stopping at the first failure.
    pub fn run(&self, mut buffer: PixelBuffer) -> Result<PixelBuffer, BitmapError> {
        for (i, step) in self.steps.iter().enumerate() {
            step.apply(&mut buffer)?;
            tracing::info!(
                step = i,
                ?step,
                width = buffer.width(),
                height = buffer.height(),
                channels = buffer.channels().count(),
                "Applied step"
            );
        }
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_dither::Channels;

    #[test]
    fn test_dither_mode_maps_to_algorithm() {
        assert_eq!(
            DitherAlgorithm::from(DitherMode::Mono),
            DitherAlgorithm::Monochrome
        );
        assert_eq!(
            DitherAlgorithm::from(DitherMode::Color),
            DitherAlgorithm::SevenColor
        );
    }

    #[test]
    fn test_run_applies_steps_in_order() {
        let pipeline = Pipeline::new(vec![
            Step::Resize { width: 8 },
            Step::Grayscale,
            Step::Dither {
                algorithm: DitherMode::Mono,
            },
        ]);
        let buffer = PixelBuffer::filled(16, 12, &[10, 20, 30]).unwrap();
        let out = pipeline.run(buffer).unwrap();
        assert_eq!((out.width(), out.height()), (8, 6));
        assert_eq!(out.channels(), Channels::Rgb);
        assert!(out.to_raw().iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn test_run_stops_on_error() {
        let pipeline = Pipeline::new(vec![Step::Shrink { width: 0 }, Step::Grayscale]);
        let buffer = PixelBuffer::filled(4, 4, &[1, 2, 3]).unwrap();
        assert_eq!(pipeline.run(buffer), Err(BitmapError::ZeroWidth));
    }

    #[test]
    fn test_expand_and_shrink_steps_are_one_way() {
        let mut buffer = PixelBuffer::filled(4, 4, &[1]).unwrap();
        Step::Expand { width: 2 }.apply(&mut buffer).unwrap();
        assert_eq!(buffer.width(), 4);
        Step::Shrink { width: 8 }.apply(&mut buffer).unwrap();
        assert_eq!(buffer.width(), 4);
    }

    #[test]
    fn test_with_options_appends_after_configured_steps() {
        let pipeline = Pipeline::new(vec![Step::MarkRightHalf])
            .with_options(Some(320), OutputMode::Mono);
        assert_eq!(
            pipeline.steps(),
            &[
                Step::MarkRightHalf,
                Step::Resize { width: 320 },
                Step::Grayscale,
                Step::Dither {
                    algorithm: DitherMode::Mono
                },
            ]
        );
        assert!(Pipeline::default()
            .with_options(None, OutputMode::None)
            .steps()
            .is_empty());
    }

    #[test]
    fn test_color_mode_skips_grayscale() {
        let steps = OutputMode::Color.steps();
        assert_eq!(
            steps,
            vec![Step::Dither {
                algorithm: DitherMode::Color
            }]
        );
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let buffer = PixelBuffer::filled(3, 3, &[5, 6, 7]).unwrap();
        assert_eq!(Pipeline::default().run(buffer.clone()).unwrap(), buffer);
    }
}
