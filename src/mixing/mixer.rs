//! Pairwise and N-way color blending
//!
//! Blending interpolates gamma-encoded sRGB channels linearly and rounds
//! each result to integers. N-way blends reduce sequentially: the running mix
//! of the first `k` colors is blended with color `k + 1` at weight
//! `1 / (k + 1)`.

use crate::color::{hex_to_rgb, ColorInfo, MixedColor, Rgb};
use crate::config::MixingConfig;
use crate::constants::mixing::{MAX_JITTER_FRACTION, MIN_COLORS};
use crate::mixing::sequence::{Jitter, MixSequence};
use crate::{PaletteError, Result};

/// Running sequential mixes: entry `k` blends colors `0..=k`
pub(crate) fn cumulative_mixes(colors: &[Rgb]) -> Vec<Rgb> {
    let mut mixes: Vec<Rgb> = Vec::with_capacity(colors.len());
    for (k, &color) in colors.iter().enumerate() {
        let next = match mixes.last() {
            Some(&previous) => previous.lerp(color, 1.0 / (k + 1) as f64),
            None => color,
        };
        mixes.push(next);
    }
    mixes
}

fn require_colors(colors: &[ColorInfo]) -> Result<Vec<Rgb>> {
    if colors.len() < MIN_COLORS {
        return Err(PaletteError::InsufficientColors {
            required: MIN_COLORS,
            actual: colors.len(),
        });
    }
    colors.iter().map(|c| hex_to_rgb(&c.hex)).collect()
}

/// Color mixer holding the sequence jitter setting
#[derive(Debug, Clone, Default)]
pub struct ColorMixer {
    config: MixingConfig,
}

impl ColorMixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mixer with a custom jitter setting
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `jitter_fraction` is not a finite value
    /// within [0, 0.1]
    pub fn with_config(config: MixingConfig) -> Result<Self> {
        let jitter = config.jitter_fraction;
        if !jitter.is_finite() || !(0.0..=MAX_JITTER_FRACTION).contains(&jitter) {
            return Err(PaletteError::invalid_parameter("jitterFraction", jitter));
        }
        Ok(Self { config })
    }

    /// Blend two colors; `ratio` is the weight of `b`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `ratio` is not within [0, 1] and
    /// `InvalidColorFormat` if either entry carries a malformed hex code
    pub fn mix(&self, a: &ColorInfo, b: &ColorInfo, ratio: f64) -> Result<MixedColor> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(PaletteError::invalid_parameter("ratio", ratio));
        }
        let rgb = hex_to_rgb(&a.hex)?.lerp(hex_to_rgb(&b.hex)?, ratio);

        Ok(MixedColor {
            color: ColorInfo::named(rgb, format!("{} + {}", a.name, b.name)),
            parent_colors: vec![a.id, b.id],
            ratio: vec![1.0 - ratio, ratio],
        })
    }

    /// Blend all colors by sequential reduction
    ///
    /// The recorded `ratio` is uniform (`1 / N` each) for display, even
    /// though sequential reduction weights later colors differently.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientColors` for fewer than two colors
    pub fn mix_many(&self, colors: &[ColorInfo]) -> Result<MixedColor> {
        let rgbs = require_colors(colors)?;
        let rgb = cumulative_mixes(&rgbs)
            .last()
            .copied()
            .ok_or(PaletteError::InsufficientColors {
                required: MIN_COLORS,
                actual: 0,
            })?;
        let name = colors
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(" + ");
        let weight = 1.0 / colors.len() as f64;

        Ok(MixedColor {
            color: ColorInfo::named(rgb, name),
            parent_colors: colors.iter().map(|c| c.id).collect(),
            ratio: vec![weight; colors.len()],
        })
    }

    /// Build an animated transition of `steps + 1` frames ending at the
    /// [`mix_many`](Self::mix_many) result
    ///
    /// # Errors
    ///
    /// Returns `InsufficientColors` for fewer than two colors and
    /// `InvalidParameter` when `steps` is zero
    pub fn sequence(&self, colors: &[ColorInfo], steps: usize, jitter: Jitter) -> Result<MixSequence> {
        let rgbs = require_colors(colors)?;
        if steps == 0 {
            return Err(PaletteError::invalid_parameter("steps", steps));
        }
        Ok(MixSequence::new(rgbs, steps, self.config.jitter_fraction, jitter))
    }
}

/// Blend two colors with default settings
pub fn mix(a: &ColorInfo, b: &ColorInfo, ratio: f64) -> Result<MixedColor> {
    ColorMixer::new().mix(a, b, ratio)
}

/// Blend a palette by sequential reduction
pub fn mix_many(colors: &[ColorInfo]) -> Result<MixedColor> {
    ColorMixer::new().mix_many(colors)
}

/// Build a jittered mix sequence with default settings
pub fn generate_mix_sequence(colors: &[ColorInfo], steps: usize) -> Result<MixSequence> {
    ColorMixer::new().sequence(colors, steps, Jitter::Random)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(hex: &str) -> ColorInfo {
        ColorInfo::from_hex(hex).unwrap()
    }

    #[test]
    fn test_mix_endpoints() {
        let a = info("#12C48A");
        let b = info("#F0100F");
        assert_eq!(mix(&a, &b, 0.0).unwrap().color.rgb, a.rgb);
        assert_eq!(mix(&a, &b, 1.0).unwrap().color.rgb, b.rgb);
    }

    #[test]
    fn test_mix_red_blue() {
        let red = info("#FF0000");
        let blue = info("#0000FF");
        let mixed = mix(&red, &blue, 0.5).unwrap();

        assert_eq!(mixed.color.hex, "#800080");
        assert_eq!(mixed.ratio, vec![0.5, 0.5]);
        assert_eq!(mixed.parent_colors, vec![red.id, blue.id]);
        assert_eq!(mixed.color.name, "red + blue");
    }

    #[test]
    fn test_mix_weighted_ratio() {
        let mixed = mix(&info("#000000"), &info("#FFFFFF"), 0.25).unwrap();
        assert_eq!(mixed.color.rgb, Rgb::new(64, 64, 64));
        assert_eq!(mixed.ratio, vec![0.75, 0.25]);
    }

    #[test]
    fn test_mix_rejects_bad_ratio() {
        let a = info("#000000");
        let b = info("#FFFFFF");
        for ratio in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(mix(&a, &b, ratio), Err(PaletteError::InvalidParameter { .. })));
        }
    }

    #[test]
    fn test_mix_rejects_malformed_entry() {
        let mut a = info("#000000");
        a.hex = "#00".to_string();
        let result = mix(&a, &info("#FFFFFF"), 0.5);
        assert!(matches!(result, Err(PaletteError::InvalidColorFormat { .. })));
    }

    #[test]
    fn test_with_config_rejects_out_of_range_jitter() {
        for jitter_fraction in [5.0, -0.01, f64::NAN, f64::INFINITY] {
            let result = ColorMixer::with_config(MixingConfig { jitter_fraction });
            assert!(
                matches!(result, Err(PaletteError::InvalidParameter { .. })),
                "{} should be rejected",
                jitter_fraction
            );
        }
    }

    #[test]
    fn test_configured_jitter_stays_within_step() {
        let mixer = ColorMixer::with_config(MixingConfig { jitter_fraction: 0.1 }).unwrap();
        let steps = 10;
        let sequence = mixer
            .sequence(&[info("#FF0000"), info("#0000FF")], steps, Jitter::Seeded(1))
            .unwrap();

        for (i, frame) in sequence.frames().enumerate() {
            let offset = (frame.progress - i as f64 / steps as f64).abs();
            assert!(offset <= 0.1 / steps as f64 + 1e-12, "frame {} offset {}", i, offset);
            assert!((0.0..=1.0).contains(&frame.progress));
        }
    }

    #[test]
    fn test_mix_many_insufficient() {
        assert!(matches!(
            mix_many(&[]),
            Err(PaletteError::InsufficientColors { required: 2, actual: 0 })
        ));
        assert!(matches!(
            mix_many(&[info("#FF0000")]),
            Err(PaletteError::InsufficientColors { required: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_mix_many_sequential_reduction() {
        let colors = vec![info("#FF0000"), info("#0000FF"), info("#FFFFFF")];
        let mixed = mix_many(&colors).unwrap();

        // (255,0,0)+(0,0,255) at 1/2 -> (128,0,128); then white at 1/3
        assert_eq!(mixed.color.rgb, Rgb::new(170, 85, 170));

        // Intermediate rounding: 0.5 -> 1, then 1 * 2/3 -> 1; a centroid gives 0
        let rounding = vec![info("#000000"), info("#010101"), info("#000000")];
        assert_eq!(mix_many(&rounding).unwrap().color.hex, "#010101");

        assert_eq!(mixed.ratio.len(), 3);
        assert!(mixed.ratio.iter().all(|r| (r - 1.0 / 3.0).abs() < 1e-12));
        assert!((mixed.ratio.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert_eq!(mixed.parent_colors.len(), 3);
        assert_eq!(mixed.color.name, "red + blue + white");
    }

    #[test]
    fn test_cumulative_mixes() {
        let mixes = cumulative_mixes(&[Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]);
        assert_eq!(mixes, vec![Rgb::new(255, 0, 0), Rgb::new(128, 0, 128)]);
    }

    #[test]
    fn test_sequence_rejects_zero_steps() {
        let colors = vec![info("#FF0000"), info("#0000FF")];
        assert!(matches!(
            generate_mix_sequence(&colors, 0),
            Err(PaletteError::InvalidParameter { .. })
        ));
        assert!(generate_mix_sequence(&colors[..1], 5).is_err());
    }
}
