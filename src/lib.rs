//! # colorwell
//!
//! The color-science core of a palette tool.
//!
//! This library provides pure, stateless color computations:
//! - Conversions between RGB, hex, HSL, CIE Lab/LCh and xy chromaticity
//! - Perceptual color difference (CIE76, CIE94, CIEDE2000) and WCAG contrast
//! - Pairwise, N-way and animated color mixing
//! - Color-vision deficiency simulation with distinguishability reports
//! - Color categories and hue harmonies
//!
//! Boundary functions (hex parsing, mixing arguments) fail fast with
//! [`PaletteError`]; aggregate computations such as ΔE matrices absorb
//! malformed entries into sentinel values.
//!
//! ## Example
//!
//! ```rust
//! use colorwell::{check_wcag_compliance, classify, mix, ColorInfo};
//!
//! let red = ColorInfo::from_hex("#FF0000")?;
//! let blue = ColorInfo::from_hex("#0000FF")?;
//! let purple = mix(&red, &blue, 0.5)?;
//! println!("{} ({})", purple.color.hex, classify(&purple.color.hex)?);
//!
//! let report = check_wcag_compliance("#777777", "#FFFFFF")?;
//! println!("AA: {}, try {}", report.aa_level.normal, report.suggestions.dark_version);
//! # Ok::<(), colorwell::PaletteError>(())
//! ```

pub mod accessibility;
pub mod color;
pub mod config;
pub mod constants;
pub mod difference;
pub mod error;
pub mod mixing;
pub mod naming;

pub use accessibility::{
    simulate_color_blindness, AccessibilityReport, ColorBlindnessSimulation,
    DistinguishabilityIssue, VisionDeficiency, VisionSimulator,
};
pub use color::{
    hex_to_rgb, hsl_to_rgb, lab_to_lch, lab_to_rgb, lch_to_lab, relative_luminance, rgb_to_hex,
    rgb_to_hsl, rgb_to_lab, rgb_to_lch, rgb_to_xy_chromaticity, Chromaticity, ColorInfo, HexColor,
    Hsl, Lab, Lch, MixedColor, Rgb,
};
pub use config::PaletteConfig;
pub use difference::{
    check_wcag_compliance, contrast_ratio, delta_e, delta_e_cie94, delta_e_ciede2000,
    delta_e_matrix, DeltaEMetric, Perceptibility, WcagChecker, WcagReport,
};
pub use error::{PaletteError, Result};
pub use mixing::{generate_mix_sequence, mix, mix_many, ColorMixer, Jitter, MixFrame, MixSequence};
pub use naming::{classify, harmonies, ColorCategory, ColorClassifier, Harmonies};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_info_serialization() {
        let info = ColorInfo::from_hex("#3366CC").unwrap();

        let json = serde_json::to_string(&info).unwrap();
        let deserialized: ColorInfo = serde_json::from_str(&json).unwrap();

        assert_eq!(info, deserialized);
    }

    #[test]
    fn test_public_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorInfo>();
        assert_send_sync::<MixSequence>();
        assert_send_sync::<WcagChecker>();
        assert_send_sync::<VisionSimulator>();
        assert_send_sync::<PaletteError>();
    }
}
