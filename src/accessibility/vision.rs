//! Color-vision deficiency simulation
//!
//! The anomalous trichromacies are modeled as hue-band confusions: hues
//! inside the affected band collapse onto a single confusion hue and lose
//! part of their saturation, while hues outside the band are untouched.
//! Monochromacy keeps only relative luminance.

use serde::{Deserialize, Serialize};

use crate::accessibility::report::{evaluate, AccessibilityReport};
use crate::color::conversion::{delinearize, HslFraction};
use crate::color::{hex_to_rgb, relative_luminance, ColorInfo, Rgb};
use crate::config::AccessibilityConfig;
use crate::constants::vision;

/// Simulated color-vision deficiencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisionDeficiency {
    Protanomaly,
    Deuteranomaly,
    Tritanomaly,
    Monochromacy,
}

impl VisionDeficiency {
    pub const ALL: [VisionDeficiency; 4] = [
        VisionDeficiency::Protanomaly,
        VisionDeficiency::Deuteranomaly,
        VisionDeficiency::Tritanomaly,
        VisionDeficiency::Monochromacy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VisionDeficiency::Protanomaly => "Protanomaly",
            VisionDeficiency::Deuteranomaly => "Deuteranomaly",
            VisionDeficiency::Tritanomaly => "Tritanomaly",
            VisionDeficiency::Monochromacy => "Monochromacy",
        }
    }

    /// The hue confusion for this deficiency, if it is hue-based
    pub fn band_shift(self) -> Option<HueBandShift> {
        let (band, target_hue, saturation_factor) = match self {
            VisionDeficiency::Protanomaly => (
                vision::PROTANOMALY_BAND,
                vision::PROTANOMALY_HUE,
                vision::PROTANOMALY_SATURATION,
            ),
            VisionDeficiency::Deuteranomaly => (
                vision::DEUTERANOMALY_BAND,
                vision::DEUTERANOMALY_HUE,
                vision::DEUTERANOMALY_SATURATION,
            ),
            VisionDeficiency::Tritanomaly => (
                vision::TRITANOMALY_BAND,
                vision::TRITANOMALY_HUE,
                vision::TRITANOMALY_SATURATION,
            ),
            VisionDeficiency::Monochromacy => return None,
        };
        Some(HueBandShift {
            start: band.0,
            end: band.1,
            target_hue,
            saturation_factor,
        })
    }
}

/// Collapse hues in `[start, end)` onto `target_hue`, scaling saturation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HueBandShift {
    pub start: f64,
    pub end: f64,
    pub target_hue: f64,
    pub saturation_factor: f64,
}

impl HueBandShift {
    pub fn contains(&self, hue: f64) -> bool {
        hue >= self.start && hue < self.end
    }

    pub fn apply(&self, rgb: Rgb) -> Rgb {
        let hsl = HslFraction::from_rgb(rgb);
        if hsl.s == 0.0 || !self.contains(hsl.h) {
            return rgb;
        }
        HslFraction {
            h: self.target_hue,
            s: hsl.s * self.saturation_factor,
            l: hsl.l,
        }
        .to_rgb()
    }
}

/// Gray with the same relative luminance as `rgb`
pub fn monochrome(rgb: Rgb) -> Rgb {
    let level = delinearize(relative_luminance(rgb)) * 255.0;
    Rgb::from_finite_channels(level, level, level)
}

/// A palette as seen under each deficiency, with its distinguishability report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBlindnessSimulation {
    pub original: Vec<ColorInfo>,
    pub protanomaly: Vec<ColorInfo>,
    pub deuteranomaly: Vec<ColorInfo>,
    pub tritanomaly: Vec<ColorInfo>,
    pub monochromacy: Vec<ColorInfo>,
    pub accessibility: AccessibilityReport,
}

impl ColorBlindnessSimulation {
    /// The simulated palette for one deficiency
    pub fn variant(&self, deficiency: VisionDeficiency) -> &[ColorInfo] {
        match deficiency {
            VisionDeficiency::Protanomaly => &self.protanomaly,
            VisionDeficiency::Deuteranomaly => &self.deuteranomaly,
            VisionDeficiency::Tritanomaly => &self.tritanomaly,
            VisionDeficiency::Monochromacy => &self.monochromacy,
        }
    }
}

/// Simulator with a configurable distinguishability threshold
#[derive(Debug, Clone, Default)]
pub struct VisionSimulator {
    config: AccessibilityConfig,
}

impl VisionSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AccessibilityConfig) -> Self {
        Self { config }
    }

    /// Simulate how a single color appears under a deficiency
    pub fn simulate(&self, rgb: Rgb, deficiency: VisionDeficiency) -> Rgb {
        match deficiency.band_shift() {
            Some(shift) => shift.apply(rgb),
            None => monochrome(rgb),
        }
    }

    fn simulate_entries(&self, colors: &[ColorInfo], deficiency: VisionDeficiency) -> Vec<ColorInfo> {
        colors
            .iter()
            .map(|color| match hex_to_rgb(&color.hex) {
                Ok(rgb) => color.recolored(self.simulate(rgb, deficiency)),
                Err(e) => {
                    log::warn!("{} simulation passes entry through: {}", deficiency.label(), e);
                    color.clone()
                }
            })
            .collect()
    }

    /// Simulate every deficiency over a palette and evaluate distinguishability
    ///
    /// Simulated entries keep the id and name of their original.
    pub fn simulate_palette(&self, colors: &[ColorInfo]) -> ColorBlindnessSimulation {
        let protanomaly = self.simulate_entries(colors, VisionDeficiency::Protanomaly);
        let deuteranomaly = self.simulate_entries(colors, VisionDeficiency::Deuteranomaly);
        let tritanomaly = self.simulate_entries(colors, VisionDeficiency::Tritanomaly);
        let monochromacy = self.simulate_entries(colors, VisionDeficiency::Monochromacy);

        let accessibility = evaluate(
            &[
                (VisionDeficiency::Protanomaly, protanomaly.as_slice()),
                (VisionDeficiency::Deuteranomaly, deuteranomaly.as_slice()),
                (VisionDeficiency::Tritanomaly, tritanomaly.as_slice()),
                (VisionDeficiency::Monochromacy, monochromacy.as_slice()),
            ],
            self.config.min_delta_e,
        );

        ColorBlindnessSimulation {
            original: colors.to_vec(),
            protanomaly,
            deuteranomaly,
            tritanomaly,
            monochromacy,
            accessibility,
        }
    }
}

/// Simulate all deficiencies over a palette with default settings
pub fn simulate_color_blindness(colors: &[ColorInfo]) -> ColorBlindnessSimulation {
    VisionSimulator::new().simulate_palette(colors)
}
