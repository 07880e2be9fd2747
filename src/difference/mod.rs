//! Color difference engine
//!
//! Perceptual distance metrics (ΔE) and WCAG contrast evaluation. Every
//! aggregate computation here is total: malformed colors produce sentinel
//! values rather than errors.

pub mod contrast;
pub mod delta_e;

pub use contrast::{
    check_wcag_compliance, contrast_ratio, contrast_ratio_rgb, Adjustment, LevelResult,
    Suggestions, WcagChecker, WcagReport,
};
pub use delta_e::{
    delta_e, delta_e_cie94, delta_e_ciede2000, delta_e_matrix, DeltaEMetric, Perceptibility,
};
