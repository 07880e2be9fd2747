//! Deterministic color categories
//!
//! Every color maps to exactly one category, checked in order:
//! 1. exact match against the pure black/white/primary/secondary table
//! 2. Lab lightness extremes (dark tone, light tone)
//! 3. near-zero HSL saturation (gray tone)
//! 4. one of twelve 30° hue bands centered on red at 0°

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::conversion::{lab_exact, HslFraction};
use crate::color::{hex_to_rgb, Rgb};
use crate::config::ClassificationConfig;
use crate::constants::classification::HUE_BAND_WIDTH;
use crate::Result;

/// Human-readable color category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorCategory {
    Black,
    White,
    DarkTone,
    LightTone,
    GrayTone,
    Red,
    Orange,
    Yellow,
    YellowGreen,
    Green,
    BlueGreen,
    Cyan,
    SkyBlue,
    Blue,
    Violet,
    Purple,
    Magenta,
}

/// Hue bands in order of increasing hue, starting at [345°, 15°)
const HUE_BANDS: [ColorCategory; 12] = [
    ColorCategory::Red,
    ColorCategory::Orange,
    ColorCategory::Yellow,
    ColorCategory::YellowGreen,
    ColorCategory::Green,
    ColorCategory::BlueGreen,
    ColorCategory::Cyan,
    ColorCategory::SkyBlue,
    ColorCategory::Blue,
    ColorCategory::Violet,
    ColorCategory::Purple,
    ColorCategory::Magenta,
];

impl ColorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ColorCategory::Black => "black",
            ColorCategory::White => "white",
            ColorCategory::DarkTone => "dark tone",
            ColorCategory::LightTone => "light tone",
            ColorCategory::GrayTone => "gray tone",
            ColorCategory::Red => "red",
            ColorCategory::Orange => "orange",
            ColorCategory::Yellow => "yellow",
            ColorCategory::YellowGreen => "yellow-green",
            ColorCategory::Green => "green",
            ColorCategory::BlueGreen => "blue-green",
            ColorCategory::Cyan => "cyan",
            ColorCategory::SkyBlue => "sky-blue",
            ColorCategory::Blue => "blue",
            ColorCategory::Violet => "violet",
            ColorCategory::Purple => "purple",
            ColorCategory::Magenta => "magenta",
        }
    }

    /// Category of a hue angle in degrees
    pub fn from_hue(hue: f64) -> Self {
        let shifted = (hue + HUE_BAND_WIDTH / 2.0).rem_euclid(360.0);
        let index = (shifted / HUE_BAND_WIDTH).floor() as usize % HUE_BANDS.len();
        HUE_BANDS[index]
    }
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn named_color(rgb: Rgb) -> Option<ColorCategory> {
    let category = match (rgb.r, rgb.g, rgb.b) {
        (0, 0, 0) => ColorCategory::Black,
        (255, 255, 255) => ColorCategory::White,
        (255, 0, 0) => ColorCategory::Red,
        (0, 255, 0) => ColorCategory::Green,
        (0, 0, 255) => ColorCategory::Blue,
        (255, 255, 0) => ColorCategory::Yellow,
        (0, 255, 255) => ColorCategory::Cyan,
        (255, 0, 255) => ColorCategory::Magenta,
        _ => return None,
    };
    Some(category)
}

/// Classifier with configurable lightness and saturation cut-offs
#[derive(Debug, Clone, Default)]
pub struct ColorClassifier {
    config: ClassificationConfig,
}

impl ColorClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClassificationConfig) -> Self {
        Self { config }
    }

    /// Classify a hex color
    ///
    /// # Errors
    ///
    /// Returns `InvalidColorFormat` if the hex string is malformed
    pub fn classify(&self, hex: &str) -> Result<ColorCategory> {
        Ok(self.classify_rgb(hex_to_rgb(hex)?))
    }

    pub fn classify_rgb(&self, rgb: Rgb) -> ColorCategory {
        if let Some(category) = named_color(rgb) {
            return category;
        }

        let lightness = lab_exact(rgb).l;
        if lightness < self.config.dark_lightness {
            return ColorCategory::DarkTone;
        }
        if lightness > self.config.light_lightness {
            return ColorCategory::LightTone;
        }

        let hsl = HslFraction::from_rgb(rgb);
        if hsl.s < self.config.gray_saturation {
            return ColorCategory::GrayTone;
        }

        ColorCategory::from_hue(hsl.h)
    }
}

/// Classify a hex color with default thresholds
pub fn classify(hex: &str) -> Result<ColorCategory> {
    ColorClassifier::new().classify(hex)
}
