//! Configuration structures for the extraction pipeline.
//!
//! This module groups every tunable parameter of color pair extraction:
//! sampling grid, quantization step, selection thresholds and background
//! darkening.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use contrast_pair::ExtractionConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ExtractionConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = ExtractionConfig::default();
//! # Ok::<(), contrast_pair::ExtractionError>(())
//! ```
//!
//! Every field has a default, so a file only needs the values it changes:
//!
//! ```json
//! { "selection": { "min_contrast": 4.5 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{quantization, roles, sampling, thresholds};
use crate::{ExtractionError, Result};

/// Complete pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub sampling: SamplingConfig,
    pub quantization: QuantizationConfig,
    pub selection: SelectionConfig,
    pub roles: RoleConfig,
}

/// Resize grid applied to every input image
///
/// Each side must be in 1..=1024.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            width: sampling::SAMPLE_WIDTH,
            height: sampling::SAMPLE_HEIGHT,
        }
    }
}

/// Histogram bucket width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantizationConfig {
    /// Channel bucket width (1-255)
    pub step: u8,
}

impl Default for QuantizationConfig {
    fn default() -> Self {
        Self {
            step: quantization::STEP,
        }
    }
}

/// Pair acceptance thresholds.
///
/// The relaxed distance is not configured directly; it is always
/// `min_distance * relaxed_distance_factor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Strict tier minimum WCAG contrast ratio
    pub min_contrast: f64,

    /// Strict tier minimum redmean distance
    pub min_distance: f64,

    /// Relaxed tier minimum WCAG contrast ratio
    pub relaxed_contrast: f64,

    /// Fraction of `min_distance` required by the relaxed tier
    pub relaxed_distance_factor: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            min_contrast: thresholds::MIN_CONTRAST,
            min_distance: thresholds::MIN_DISTANCE,
            relaxed_contrast: thresholds::RELAXED_CONTRAST,
            relaxed_distance_factor: thresholds::RELAXED_DISTANCE_FACTOR,
        }
    }
}

impl SelectionConfig {
    /// Distance threshold of the relaxed tier
    pub fn relaxed_distance(&self) -> f64 {
        self.min_distance * self.relaxed_distance_factor
    }
}

/// Foreground/background role parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleConfig {
    /// Multiplier applied to each background channel (0.0-1.0)
    pub background_darkening: f64,
}

impl Default for RoleConfig {
    fn default() -> Self {
        Self {
            background_darkening: roles::BACKGROUND_DARKENING,
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ExtractionError::config(format!("Failed to read {}: {}", path.display(), e), e)
        })?;
        serde_json::from_str(&content).map_err(|e| {
            ExtractionError::config(format!("Failed to parse {}: {}", path.display(), e), e)
        })
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|e| {
            ExtractionError::config(format!("Failed to write {}: {}", path.display(), e), e)
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExtractionError::config(format!("Failed to serialize configuration: {}", e), e))
    }

    /// Reject values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        let grid = 1..=sampling::MAX_SAMPLE_DIMENSION;
        if !grid.contains(&self.sampling.width) {
            return Err(ExtractionError::invalid_parameter("sampling.width", self.sampling.width));
        }
        if !grid.contains(&self.sampling.height) {
            return Err(ExtractionError::invalid_parameter("sampling.height", self.sampling.height));
        }
        if self.quantization.step == 0 {
            return Err(ExtractionError::invalid_parameter("quantization.step", self.quantization.step));
        }

        let selection = &self.selection;
        if !(selection.min_contrast.is_finite() && selection.min_contrast >= 1.0) {
            return Err(ExtractionError::invalid_parameter("selection.min_contrast", selection.min_contrast));
        }
        if !(selection.relaxed_contrast.is_finite() && selection.relaxed_contrast >= 1.0) {
            return Err(ExtractionError::invalid_parameter(
                "selection.relaxed_contrast",
                selection.relaxed_contrast,
            ));
        }
        if !(selection.min_distance.is_finite() && selection.min_distance >= 0.0) {
            return Err(ExtractionError::invalid_parameter("selection.min_distance", selection.min_distance));
        }
        if !(0.0..=1.0).contains(&selection.relaxed_distance_factor) {
            return Err(ExtractionError::invalid_parameter(
                "selection.relaxed_distance_factor",
                selection.relaxed_distance_factor,
            ));
        }
        if !(0.0..=1.0).contains(&self.roles.background_darkening) {
            return Err(ExtractionError::invalid_parameter(
                "roles.background_darkening",
                self.roles.background_darkening,
            ));
        }
        Ok(())
    }
}
