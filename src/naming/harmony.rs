//! Hue-rotation color harmonies
//!
//! Each harmony rotates the base hue by fixed offsets while keeping the base
//! saturation and lightness. The base color itself is not included.

use serde::{Deserialize, Serialize};

use crate::color::conversion::HslFraction;
use crate::color::hex_to_rgb;
use crate::Result;

const COMPLEMENTARY: [f64; 1] = [180.0];
const TRIADIC: [f64; 2] = [120.0, 240.0];
const TETRADIC: [f64; 3] = [90.0, 180.0, 270.0];
const ANALOGOUS: [f64; 2] = [-30.0, 30.0];
const SPLIT_COMPLEMENTARY: [f64; 2] = [150.0, 210.0];

/// Harmony sets of a base color, as hex codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Harmonies {
    pub complementary: Vec<String>,
    pub triadic: Vec<String>,
    pub tetradic: Vec<String>,
    pub analogous: Vec<String>,
    pub split_complementary: Vec<String>,
}

fn rotate(base: HslFraction, offsets: &[f64]) -> Vec<String> {
    offsets
        .iter()
        .map(|offset| base.with_hue(base.h + offset).to_rgb().to_hex())
        .collect()
}

/// Compute every harmony set for a hex color
///
/// # Errors
///
/// Returns `InvalidColorFormat` if the hex string is malformed
pub fn harmonies(hex: &str) -> Result<Harmonies> {
    let base = HslFraction::from_rgb(hex_to_rgb(hex)?);

    Ok(Harmonies {
        complementary: rotate(base, &COMPLEMENTARY),
        triadic: rotate(base, &TRIADIC),
        tetradic: rotate(base, &TETRADIC),
        analogous: rotate(base, &ANALOGOUS),
        split_complementary: rotate(base, &SPLIT_COMPLEMENTARY),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_harmonies() {
        let h = harmonies("#FF0000").unwrap();
        assert_eq!(h.complementary, vec!["#00FFFF"]);
        assert_eq!(h.triadic, vec!["#00FF00", "#0000FF"]);
        assert_eq!(h.tetradic, vec!["#80FF00", "#00FFFF", "#8000FF"]);
        assert_eq!(h.analogous, vec!["#FF0080", "#FF8000"]);
        assert_eq!(h.split_complementary, vec!["#00FF80", "#0080FF"]);
    }

    #[test]
    fn test_harmonies_keep_saturation_and_lightness() {
        let base = HslFraction::from_rgb(hex_to_rgb("#336699").unwrap());
        let h = harmonies("#336699").unwrap();
        for hex in h.triadic.iter().chain(&h.analogous) {
            let rotated = HslFraction::from_rgb(hex_to_rgb(hex).unwrap());
            assert!((rotated.s - base.s).abs() < 0.02, "{}", hex);
            assert!((rotated.l - base.l).abs() < 0.01, "{}", hex);
        }
    }

    #[test]
    fn test_gray_harmonies_are_gray() {
        let h = harmonies("#808080").unwrap();
        assert_eq!(h.complementary, vec!["#808080"]);
        assert!(h.tetradic.iter().all(|c| c == "#808080"));
    }

    #[test]
    fn test_harmony_counts() {
        let h = harmonies("#3C8D2F").unwrap();
        assert_eq!(h.complementary.len(), 1);
        assert_eq!(h.triadic.len(), 2);
        assert_eq!(h.tetradic.len(), 3);
        assert_eq!(h.analogous.len(), 2);
        assert_eq!(h.split_complementary.len(), 2);
    }

    #[test]
    fn test_invalid_hex() {
        assert!(harmonies("not a color").is_err());
    }
}
