use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::pipeline::{Pipeline, Step};

/// Environment variable naming a default pipeline config file.
pub const CONFIG_ENV: &str = "RASTERINK_CONFIG";

/// Pipeline configuration loaded from YAML.
///
/// ```yaml
/// quality: 85
/// steps:
///   - op: resize
///     width: 600
///   - op: grayscale
///   - op: dither
///     algorithm: mono
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// JPEG quality, clamped to 0..=100 at encode time
    #[serde(default = "default_quality")]
    pub quality: i32,

    /// Processing steps in order
    #[serde(default)]
    pub steps: Vec<Step>,
}

fn default_quality() -> i32 {
    90
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            quality: default_quality(),
            steps: Vec::new(),
        }
    }
}

impl PipelineConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            steps = config.steps.len(),
            quality = config.quality,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Build the pipeline described by `steps`.
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.steps.clone())
    }
}
