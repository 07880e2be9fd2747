//! WCAG contrast ratio and compliance checking
//!
//! Implements the WCAG 2.x luminance ratio `(L1 + 0.05) / (L2 + 0.05)` and a
//! bounded search for lighter and darker variants of a foreground color that
//! reach the AA threshold.

use serde::{Deserialize, Serialize};

use crate::color::conversion::{lab_exact, round2};
use crate::color::{hex_to_rgb, lab_to_rgb, relative_luminance, HexColor, Lab, Rgb};
use crate::config::ContrastConfig;
use crate::constants::wcag;
use crate::Result;

/// Pass/fail for normal and large text at one conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelResult {
    pub normal: bool,
    pub large: bool,
}

/// Suggested foreground replacements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestions {
    pub light_version: String,
    pub dark_version: String,
}

/// Complete WCAG evaluation of a foreground/background pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WcagReport {
    pub foreground: String,
    pub background: String,
    /// Ratio rounded to 2 decimals
    pub contrast_ratio: f64,
    pub aa_level: LevelResult,
    pub aaa_level: LevelResult,
    pub suggestions: Suggestions,
}

/// Direction of a suggestion search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Brighten,
    Darken,
}

impl Adjustment {
    fn sign(self) -> f64 {
        match self {
            Adjustment::Brighten => 1.0,
            Adjustment::Darken => -1.0,
        }
    }
}

/// Contrast ratio between two RGB colors, in [1, 21]
pub fn contrast_ratio_rgb(foreground: Rgb, background: Rgb) -> f64 {
    let l1 = relative_luminance(foreground);
    let l2 = relative_luminance(background);
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + wcag::FLARE) / (darker + wcag::FLARE)
}

/// Contrast ratio between two hex-carrying colors
///
/// Returns the minimal ratio 1.0 if either color cannot be parsed.
pub fn contrast_ratio<A, B>(foreground: &A, background: &B) -> f64
where
    A: HexColor + ?Sized,
    B: HexColor + ?Sized,
{
    match (hex_to_rgb(foreground.hex_code()), hex_to_rgb(background.hex_code())) {
        (Ok(fg), Ok(bg)) => contrast_ratio_rgb(fg, bg),
        (Err(e), _) | (_, Err(e)) => {
            log::warn!("Contrast floor applied: {}", e);
            wcag::MIN_RATIO
        }
    }
}

/// WCAG checker with configurable suggestion search
#[derive(Debug, Clone, Default)]
pub struct WcagChecker {
    config: ContrastConfig,
}

impl WcagChecker {
    /// Create a checker with default thresholds and search bounds
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ContrastConfig) -> Self {
        Self { config }
    }

    /// Evaluate a foreground/background pair
    ///
    /// # Errors
    ///
    /// Returns `InvalidColorFormat` if either hex string is malformed
    pub fn check(&self, foreground: &str, background: &str) -> Result<WcagReport> {
        let fg = hex_to_rgb(foreground)?;
        let bg = hex_to_rgb(background)?;
        let ratio = contrast_ratio_rgb(fg, bg);

        Ok(WcagReport {
            foreground: fg.to_hex(),
            background: bg.to_hex(),
            contrast_ratio: round2(ratio),
            aa_level: LevelResult {
                normal: ratio >= wcag::AA_NORMAL,
                large: ratio >= wcag::AA_LARGE,
            },
            aaa_level: LevelResult {
                normal: ratio >= wcag::AAA_NORMAL,
                large: ratio >= wcag::AAA_LARGE,
            },
            suggestions: Suggestions {
                light_version: self.suggest(fg, bg, Adjustment::Brighten).to_hex(),
                dark_version: self.suggest(fg, bg, Adjustment::Darken).to_hex(),
            },
        })
    }

    /// Step the foreground's L* until the target ratio is reached
    ///
    /// Stops at the target, at the iteration ceiling, or as soon as a step
    /// fails to raise the ratio. Returns the best color reached, which is the
    /// foreground itself when no step helps.
    pub fn suggest(&self, foreground: Rgb, background: Rgb, adjustment: Adjustment) -> Rgb {
        let delta_l = adjustment.sign() * self.config.step * wcag::LIGHTNESS_PER_STEP_UNIT;
        let mut best = foreground;
        let mut best_ratio = contrast_ratio_rgb(foreground, background);
        let mut iterations = 0;

        while best_ratio < self.config.target_ratio && iterations < self.config.max_iterations {
            iterations += 1;
            let lab = lab_exact(best);
            let candidate = lab_to_rgb(Lab::new((lab.l + delta_l).clamp(0.0, 100.0), lab.a, lab.b));
            let ratio = contrast_ratio_rgb(candidate, background);
            if ratio <= best_ratio {
                break;
            }
            best = candidate;
            best_ratio = ratio;
        }

        log::debug!(
            "{:?} suggestion for {} on {}: {} (ratio {:.2}, {} iterations)",
            adjustment,
            foreground,
            background,
            best,
            best_ratio,
            iterations
        );
        best
    }
}

/// Evaluate a pair against WCAG AA/AAA with default settings
pub fn check_wcag_compliance(foreground: &str, background: &str) -> Result<WcagReport> {
    WcagChecker::new().check(foreground, background)
}
