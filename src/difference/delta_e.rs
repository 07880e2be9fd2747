//! Perceptual color difference (ΔE)
//!
//! Three metrics over CIE Lab (D65):
//! - CIE76: Euclidean distance, the default scale (black to white = 100)
//! - CIE94: graphic-arts weighting, never larger than CIE76
//! - CIEDE2000: CIE Technical Report 142-2001
//!
//! The hex-accepting entry points never fail. Malformed input yields
//! [`delta_e::PENALTY`](crate::constants::delta_e::PENALTY) so a single bad
//! palette entry cannot abort a batch comparison.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::color::conversion::lab_exact;
use crate::color::{hex_to_rgb, HexColor, Lab};
use crate::constants::delta_e as bands;

/// Available color difference formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaEMetric {
    #[default]
    Cie76,
    Cie94,
    Ciede2000,
}

impl DeltaEMetric {
    /// Compute the difference between two Lab colors
    pub fn between_lab(self, lab1: Lab, lab2: Lab) -> f64 {
        match self {
            DeltaEMetric::Cie76 => cie76(lab1, lab2),
            DeltaEMetric::Cie94 => cie94(lab1, lab2),
            DeltaEMetric::Ciede2000 => ciede2000(lab1, lab2),
        }
    }

    /// Compute the difference between two hex-carrying colors
    ///
    /// Returns the penalty value if either color cannot be parsed.
    pub fn between<A, B>(self, a: &A, b: &B) -> f64
    where
        A: HexColor + ?Sized,
        B: HexColor + ?Sized,
    {
        match (parse_lab(a.hex_code()), parse_lab(b.hex_code())) {
            (Some(lab1), Some(lab2)) => self.between_lab(lab1, lab2),
            _ => bands::PENALTY,
        }
    }
}

fn parse_lab(hex: &str) -> Option<Lab> {
    match hex_to_rgb(hex) {
        Ok(rgb) => Some(lab_exact(rgb)),
        Err(e) => {
            log::warn!("ΔE penalty applied: {}", e);
            None
        }
    }
}

/// CIE76 difference between two colors; 100 if either is malformed
pub fn delta_e<A, B>(a: &A, b: &B) -> f64
where
    A: HexColor + ?Sized,
    B: HexColor + ?Sized,
{
    DeltaEMetric::Cie76.between(a, b)
}

/// CIE94 difference between two colors; 100 if either is malformed
pub fn delta_e_cie94<A, B>(a: &A, b: &B) -> f64
where
    A: HexColor + ?Sized,
    B: HexColor + ?Sized,
{
    DeltaEMetric::Cie94.between(a, b)
}

/// CIEDE2000 difference between two colors; 100 if either is malformed
pub fn delta_e_ciede2000<A, B>(a: &A, b: &B) -> f64
where
    A: HexColor + ?Sized,
    B: HexColor + ?Sized,
{
    DeltaEMetric::Ciede2000.between(a, b)
}

/// Euclidean distance in Lab (ΔE*ab 1976)
pub fn cie76(lab1: Lab, lab2: Lab) -> f64 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// CIE94 with graphic-arts constants (kL = 1, K1 = 0.045, K2 = 0.015)
///
/// The chroma weighting uses the mean chroma of both colors, which keeps the
/// metric symmetric. Both weights are at least 1, so the result never
/// exceeds [`cie76`].
pub fn cie94(lab1: Lab, lab2: Lab) -> f64 {
    const K1: f64 = 0.045;
    const K2: f64 = 0.015;

    let c1 = lab1.a.hypot(lab1.b);
    let c2 = lab2.a.hypot(lab2.b);
    let c_mean = (c1 + c2) / 2.0;

    let dl = lab1.l - lab2.l;
    let dc = c1 - c2;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    let dh_sq = (da * da + db * db - dc * dc).max(0.0);

    let sc = 1.0 + K1 * c_mean;
    let sh = 1.0 + K2 * c_mean;

    (dl * dl + (dc / sc).powi(2) + dh_sq / (sh * sh)).sqrt()
}

/// CIEDE2000 color difference (ΔE00) with unit parametric factors
pub fn ciede2000(lab1: Lab, lab2: Lab) -> f64 {
    const POW25_7: f64 = 6_103_515_625.0; // 25^7

    let c_mean = (lab1.a.hypot(lab1.b) + lab2.a.hypot(lab2.b)) / 2.0;
    let c_mean_7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean_7 / (c_mean_7 + POW25_7)).sqrt());

    let a1 = lab1.a * (1.0 + g);
    let a2 = lab2.a * (1.0 + g);
    let c1 = a1.hypot(lab1.b);
    let c2 = a2.hypot(lab2.b);
    let h1 = hue_degrees(a1, lab1.b);
    let h2 = hue_degrees(a2, lab2.b);

    let dl = lab2.l - lab1.l;
    let dc = c2 - c1;
    let chroma_product = c1 * c2;

    let dh = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2 - h1;
        if diff > 180.0 {
            diff - 360.0
        } else if diff < -180.0 {
            diff + 360.0
        } else {
            diff
        }
    };
    let dh_big = 2.0 * chroma_product.sqrt() * (dh.to_radians() / 2.0).sin();

    let l_mean = (lab1.l + lab2.l) / 2.0;
    let c_prime_mean = (c1 + c2) / 2.0;
    let h_mean = if chroma_product == 0.0 {
        h1 + h2
    } else if (h1 - h2).abs() <= 180.0 {
        (h1 + h2) / 2.0
    } else if h1 + h2 < 360.0 {
        (h1 + h2 + 360.0) / 2.0
    } else {
        (h1 + h2 - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

    let l_offset_sq = (l_mean - 50.0).powi(2);
    let sl = 1.0 + 0.015 * l_offset_sq / (20.0 + l_offset_sq).sqrt();
    let sc = 1.0 + 0.045 * c_prime_mean;
    let sh = 1.0 + 0.015 * c_prime_mean * t;

    let d_theta = 30.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp();
    let c_prime_mean_7 = c_prime_mean.powi(7);
    let rc = 2.0 * (c_prime_mean_7 / (c_prime_mean_7 + POW25_7)).sqrt();
    let rt = -(2.0 * d_theta * PI / 180.0).sin() * rc;

    let term_l = dl / sl;
    let term_c = dc / sc;
    let term_h = dh_big / sh;

    (term_l * term_l + term_c * term_c + term_h * term_h + rt * term_c * term_h)
        .max(0.0)
        .sqrt()
}

fn hue_degrees(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        0.0
    } else {
        b.atan2(a).to_degrees().rem_euclid(360.0)
    }
}

/// Pairwise difference matrix over a palette
///
/// Total over any input: malformed entries score the penalty against every
/// other entry and 0 against themselves.
pub fn delta_e_matrix<T: HexColor>(colors: &[T], metric: DeltaEMetric) -> Vec<Vec<f64>> {
    let labs: Vec<Option<Lab>> = colors.iter().map(|c| parse_lab(c.hex_code())).collect();

    labs.iter()
        .enumerate()
        .map(|(i, row)| {
            labs.iter()
                .enumerate()
                .map(|(j, col)| match (row, col) {
                    _ if i == j => 0.0,
                    (Some(lab1), Some(lab2)) => metric.between_lab(*lab1, *lab2),
                    _ => bands::PENALTY,
                })
                .collect()
        })
        .collect()
}

/// How noticeable a color difference is to a typical observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Perceptibility {
    Identical,
    Imperceptible,
    CloseInspection,
    AtAGlance,
    DistinctlyDifferent,
    CompletelyDifferent,
}

impl Perceptibility {
    /// Band a ΔE value
    pub fn from_delta_e(delta_e: f64) -> Self {
        if delta_e <= 0.0 {
            Self::Identical
        } else if delta_e < bands::IMPERCEPTIBLE {
            Self::Imperceptible
        } else if delta_e < bands::CLOSE_INSPECTION {
            Self::CloseInspection
        } else if delta_e < bands::AT_A_GLANCE {
            Self::AtAGlance
        } else if delta_e < bands::DISTINCT {
            Self::DistinctlyDifferent
        } else {
            Self::CompletelyDifferent
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Identical => "Colors are identical",
            Self::Imperceptible => "Imperceptible to the human eye",
            Self::CloseInspection => "Perceptible only on close inspection",
            Self::AtAGlance => "Perceptible at a glance",
            Self::DistinctlyDifferent => "Colors look distinctly different",
            Self::CompletelyDifferent => "Colors look completely different",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorInfo;

    #[test]
    fn test_delta_e_same_color() {
        assert_eq!(delta_e("#FF0000", "#FF0000"), 0.0);
        assert_eq!(delta_e_cie94("#3366CC", "#3366cc"), 0.0);
        assert!(delta_e_ciede2000("#3366CC", "#36C").abs() < 1e-9);
    }

    #[test]
    fn test_delta_e_black_white() {
        let de = delta_e("#000000", "#FFFFFF");
        assert!((de - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_delta_e_symmetric() {
        let pairs = [("#FF0000", "#00FF00"), ("#123456", "#654321"), ("#777777", "#FFA500")];
        for (a, b) in pairs {
            assert_eq!(delta_e(a, b), delta_e(b, a));
            assert!((delta_e_cie94(a, b) - delta_e_cie94(b, a)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_cie94_never_exceeds_cie76() {
        let palette = [
            "#000000", "#FFFFFF", "#FF0000", "#00FF00", "#0000FF", "#808080", "#FFA500",
            "#123456", "#FEDCBA", "#7F7F80", "#010101",
        ];
        for a in palette {
            for b in palette {
                assert!(delta_e_cie94(a, b) <= delta_e(a, b) + 1e-9, "{} vs {}", a, b);
            }
        }
        assert!(delta_e_cie94("#FF0000", "#FFA500") < 0.95 * delta_e("#FF0000", "#FFA500"));
    }

    #[test]
    fn test_ciede2000_reference_vectors() {
        // Sharma, Wu & Dalal (2005) test data, pairs 1, 7 and 17
        let cases = [
            (Lab::new(50.0, 2.6772, -79.7751), Lab::new(50.0, 0.0, -82.7485), 2.0425),
            (Lab::new(50.0, 0.0, 0.0), Lab::new(50.0, -1.0, 2.0), 2.3669),
            (Lab::new(50.0, 2.5, 0.0), Lab::new(73.0, 25.0, -18.0), 27.1492),
        ];
        for (lab1, lab2, expected) in cases {
            let de = ciede2000(lab1, lab2);
            assert!((de - expected).abs() < 1e-3, "expected {}, got {}", expected, de);
        }
    }

    #[test]
    fn test_malformed_input_penalty() {
        assert_eq!(delta_e("#GGGGGG", "#FFFFFF"), 100.0);
        assert_eq!(delta_e_cie94("#FFFFFF", "nope"), 100.0);

        let mut broken = ColorInfo::from_hex("#FF0000").unwrap();
        broken.hex = "#12".to_string();
        assert_eq!(delta_e(&broken, "#FF0000"), 100.0);
    }

    #[test]
    fn test_delta_e_matrix_total() {
        let colors = vec!["#FF0000".to_string(), "bad".to_string(), "#FF0000".to_string()];
        let matrix = delta_e_matrix(&colors, DeltaEMetric::Cie76);
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix[0][0], 0.0);
        assert_eq!(matrix[1][1], 0.0);
        assert_eq!(matrix[0][1], 100.0);
        assert_eq!(matrix[1][2], 100.0);
        assert_eq!(matrix[0][2], 0.0);
    }

    #[test]
    fn test_perceptibility_bands() {
        assert_eq!(Perceptibility::from_delta_e(0.0), Perceptibility::Identical);
        assert_eq!(Perceptibility::from_delta_e(0.5), Perceptibility::Imperceptible);
        assert_eq!(Perceptibility::from_delta_e(1.5), Perceptibility::CloseInspection);
        assert_eq!(Perceptibility::from_delta_e(3.0), Perceptibility::AtAGlance);
        assert_eq!(Perceptibility::from_delta_e(4.9), Perceptibility::DistinctlyDifferent);
        assert_eq!(Perceptibility::from_delta_e(5.0), Perceptibility::CompletelyDifferent);
        assert_eq!(
            Perceptibility::from_delta_e(0.2).description(),
            "Imperceptible to the human eye"
        );
    }
}
