//! Distinguishability evaluation across simulated palettes

use serde::{Deserialize, Serialize};

use crate::accessibility::vision::VisionDeficiency;
use crate::color::ColorInfo;
use crate::difference::delta_e;

/// Generic advice attached whenever any issue is found
const RECOMMENDATIONS: [&str; 3] = [
    "Increase the lightness difference between colors that are hard to tell apart",
    "Add non-color cues such as labels, icons or position",
    "Use textures or patterns alongside color",
];

/// A pair of palette entries that look alike under a deficiency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistinguishabilityIssue {
    pub deficiency: VisionDeficiency,
    /// Palette index of the first entry
    pub first: usize,
    /// Palette index of the second entry (always greater than `first`)
    pub second: usize,
    pub delta_e: f64,
    pub message: String,
}

/// Outcome of comparing every pair under every simulated deficiency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityReport {
    pub is_accessible: bool,
    pub issues: Vec<DistinguishabilityIssue>,
    pub recommendations: Vec<String>,
}

/// Compare all unordered pairs of each simulated palette
///
/// Pairs with ΔE below `min_delta_e` become issues. Malformed entries score
/// the ΔE penalty and therefore never raise an issue.
pub fn evaluate(variants: &[(VisionDeficiency, &[ColorInfo])], min_delta_e: f64) -> AccessibilityReport {
    let mut issues = Vec::new();

    for &(deficiency, colors) in variants {
        for (i, first) in colors.iter().enumerate() {
            for (j, second) in colors.iter().enumerate().skip(i + 1) {
                let difference = delta_e(first, second);
                if difference < min_delta_e {
                    issues.push(DistinguishabilityIssue {
                        deficiency,
                        first: i,
                        second: j,
                        delta_e: difference,
                        message: format!(
                            "{}: '{}' and '{}' may be hard to distinguish (ΔE {:.2})",
                            deficiency.label(),
                            first.name,
                            second.name,
                            difference
                        ),
                    });
                }
            }
        }
    }

    log::debug!(
        "Accessibility evaluation over {} variants: {} issues",
        variants.len(),
        issues.len()
    );

    let recommendations = if issues.is_empty() {
        Vec::new()
    } else {
        RECOMMENDATIONS.iter().map(|r| r.to_string()).collect()
    };

    AccessibilityReport {
        is_accessible: issues.is_empty(),
        issues,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(hex: &str) -> ColorInfo {
        ColorInfo::from_hex(hex).unwrap()
    }

    #[test]
    fn test_distinct_palette_is_accessible() {
        let colors = vec![info("#000000"), info("#FFFFFF"), info("#808080")];
        let report = evaluate(&[(VisionDeficiency::Monochromacy, colors.as_slice())], 3.0);
        assert!(report.is_accessible);
        assert!(report.issues.is_empty());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_close_pair_reported_once_per_variant() {
        let colors = vec![info("#808080"), info("#818181"), info("#000000")];
        let report = evaluate(
            &[
                (VisionDeficiency::Protanomaly, colors.as_slice()),
                (VisionDeficiency::Monochromacy, colors.as_slice()),
            ],
            3.0,
        );

        assert!(!report.is_accessible);
        assert_eq!(report.issues.len(), 2);
        let issue = &report.issues[0];
        assert_eq!((issue.first, issue.second), (0, 1));
        assert_eq!(issue.deficiency, VisionDeficiency::Protanomaly);
        assert!(issue.message.starts_with("Protanomaly: 'gray tone' and 'gray tone'"));
        assert_eq!(report.recommendations.len(), 3);
    }

    #[test]
    fn test_malformed_entries_do_not_abort() {
        let mut broken = info("#808080");
        broken.hex = "#8080".to_string();
        let colors = vec![broken, info("#808080")];
        let report = evaluate(&[(VisionDeficiency::Tritanomaly, colors.as_slice())], 3.0);
        assert!(report.is_accessible);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let colors = vec![info("#808080"), info("#8A8A8A")];
        let strict = evaluate(&[(VisionDeficiency::Monochromacy, colors.as_slice())], 10.0);
        let lenient = evaluate(&[(VisionDeficiency::Monochromacy, colors.as_slice())], 1.0);
        assert!(!strict.is_accessible);
        assert!(lenient.is_accessible);
    }
}
