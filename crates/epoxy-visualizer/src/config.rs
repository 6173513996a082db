//! Visualizer configuration.
//!
//! Loaded from YAML; every field is optional:
//!
//! ```yaml
//! jpeg_quality: 85
//! ```

use std::path::Path;

use epoxy_io::jpeg::DEFAULT_QUALITY;
use serde::{Deserialize, Serialize};

use crate::{Result, VisualizeError};

/// Settings shared by every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualizerConfig {
    /// JPEG quality of rendered output, 1-100.
    pub jpeg_quality: u8,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_QUALITY,
        }
    }
}

impl VisualizerConfig {
    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(VisualizeError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Loads configuration from a YAML string and validates it.
    ///
    /// ```rust
    /// use epoxy_visualizer::VisualizerConfig;
    ///
    /// let config = VisualizerConfig::from_yaml_str("jpeg_quality: 70").unwrap();
    /// assert_eq!(config.jpeg_quality, 70);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Serializes to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks the quality range.
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(VisualizeError::Config(format!(
                "jpeg_quality must be 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }

    /// Returns a copy with a different JPEG quality.
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }
}
