//! Tunable parameters for the colorwell components.
//!
//! Every component works with built-in defaults; this module lets a host
//! application override them, typically from a JSON file shipped with the
//! palette tool.
//!
//! ```no_run
//! use colorwell::PaletteConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = PaletteConfig::from_json_file(Path::new("palette.json"))?;
//!
//! // Or use defaults
//! let config = PaletteConfig::default();
//! # Ok::<(), colorwell::PaletteError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`ContrastConfig`]: WCAG suggestion search
//! - [`MixingConfig`]: animated mix sequence jitter
//! - [`AccessibilityConfig`]: color-vision distinguishability threshold
//! - [`ClassificationConfig`]: lightness and saturation cut-offs for naming

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{classification, mixing, vision, wcag};
use crate::{PaletteError, Result};

/// Complete configuration for all components.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaletteConfig {
    pub contrast: ContrastConfig,
    pub mixing: MixingConfig,
    pub accessibility: AccessibilityConfig,
    pub classification: ClassificationConfig,
}

/// WCAG suggestion search parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContrastConfig {
    /// Ratio the suggestion search tries to reach
    pub target_ratio: f64,

    /// Brighten/darken amount applied per iteration
    pub step: f64,

    /// Hard iteration ceiling (must be at least 1)
    pub max_iterations: usize,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            target_ratio: wcag::AA_NORMAL,
            step: wcag::SUGGESTION_STEP,
            max_iterations: wcag::MAX_SUGGESTION_ITERATIONS,
        }
    }
}

/// Mix sequence parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MixingConfig {
    /// Jitter amplitude as a fraction of the progress step (0.0-0.1)
    pub jitter_fraction: f64,
}

impl Default for MixingConfig {
    fn default() -> Self {
        Self {
            jitter_fraction: mixing::MAX_JITTER_FRACTION,
        }
    }
}

/// Distinguishability evaluation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessibilityConfig {
    /// Pairs with a smaller ΔE under any simulation are reported
    pub min_delta_e: f64,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            min_delta_e: vision::MIN_DISTINGUISHABLE_DELTA_E,
        }
    }
}

/// Classification cut-offs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassificationConfig {
    /// L* below which colors are dark tones
    pub dark_lightness: f64,

    /// L* above which colors are light tones
    pub light_lightness: f64,

    /// HSL saturation fraction below which colors are gray tones
    pub gray_saturation: f64,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            dark_lightness: classification::DARK_LIGHTNESS,
            light_lightness: classification::LIGHT_LIGHTNESS,
            gray_saturation: classification::GRAY_SATURATION,
        }
    }
}

impl PaletteConfig {
    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PaletteError::config_io(path, e))?;
        Self::from_json_str(&content)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| PaletteError::config_io(path, e))?;
        Ok(())
    }

    /// Check every parameter for range and finiteness
    pub fn validate(&self) -> Result<()> {
        let contrast = &self.contrast;
        if !contrast.target_ratio.is_finite() || !(1.0..=21.0).contains(&contrast.target_ratio) {
            return Err(PaletteError::invalid_parameter("contrast.targetRatio", contrast.target_ratio));
        }
        if !contrast.step.is_finite() || contrast.step <= 0.0 {
            return Err(PaletteError::invalid_parameter("contrast.step", contrast.step));
        }
        if contrast.max_iterations == 0 {
            return Err(PaletteError::invalid_parameter("contrast.maxIterations", 0));
        }

        let jitter = self.mixing.jitter_fraction;
        if !jitter.is_finite() || !(0.0..=mixing::MAX_JITTER_FRACTION).contains(&jitter) {
            return Err(PaletteError::invalid_parameter("mixing.jitterFraction", jitter));
        }

        let min_delta_e = self.accessibility.min_delta_e;
        if !min_delta_e.is_finite() || min_delta_e < 0.0 {
            return Err(PaletteError::invalid_parameter("accessibility.minDeltaE", min_delta_e));
        }

        let naming = &self.classification;
        if !naming.dark_lightness.is_finite()
            || !naming.light_lightness.is_finite()
            || naming.dark_lightness >= naming.light_lightness
        {
            return Err(PaletteError::invalid_parameter(
                "classification.darkLightness",
                format!("{} (light {})", naming.dark_lightness, naming.light_lightness),
            ));
        }
        if !naming.gray_saturation.is_finite() || !(0.0..=1.0).contains(&naming.gray_saturation) {
            return Err(PaletteError::invalid_parameter(
                "classification.graySaturation",
                naming.gray_saturation,
            ));
        }

        Ok(())
    }
}
