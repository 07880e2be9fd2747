//! Reference values and default thresholds for the color core
//!
//! This module contains compile-time constants for colorimetry, WCAG
//! contrast evaluation, mixing and color-vision simulation.

/// D65 Standard Illuminant Reference
///
/// CIE Standard Illuminant D65 represents average daylight with a correlated
/// color temperature of 6504K. It is the reference white of sRGB.
pub mod d65 {
    /// D65 chromaticity coordinates
    pub const CHROMATICITY_X: f64 = 0.31271;
    pub const CHROMATICITY_Y: f64 = 0.32902;
}

/// sRGB transfer curve and luminance weights
pub mod srgb {
    /// Encoded value below which the transfer curve is linear
    pub const LINEAR_THRESHOLD: f64 = 0.04045;

    /// Linear value below which the inverse transfer curve is linear
    pub const ENCODED_THRESHOLD: f64 = 0.003_130_8;

    /// Exponent of the power segment
    pub const GAMMA: f64 = 2.4;

    /// Rec. 709 relative luminance weights
    pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];
}

/// WCAG 2.x contrast thresholds
pub mod wcag {
    pub const AA_NORMAL: f64 = 4.5;
    pub const AA_LARGE: f64 = 3.0;
    pub const AAA_NORMAL: f64 = 7.0;
    pub const AAA_LARGE: f64 = 4.5;

    /// Offset added to both luminances in the contrast formula
    pub const FLARE: f64 = 0.05;

    /// Lowest possible contrast ratio, also the soft-failure value
    pub const MIN_RATIO: f64 = 1.0;

    /// Brighten/darken amount per suggestion step
    pub const SUGGESTION_STEP: f64 = 0.3;

    /// L* change produced by one unit of brighten/darken
    pub const LIGHTNESS_PER_STEP_UNIT: f64 = 18.0;

    /// Hard ceiling on suggestion search iterations
    pub const MAX_SUGGESTION_ITERATIONS: usize = 20;
}

/// Color difference scale
pub mod delta_e {
    /// Value returned when either color cannot be interpreted
    pub const PENALTY: f64 = 100.0;

    /// Upper bounds of the perceptibility bands
    pub const IMPERCEPTIBLE: f64 = 1.0;
    pub const CLOSE_INSPECTION: f64 = 2.0;
    pub const AT_A_GLANCE: f64 = 3.5;
    pub const DISTINCT: f64 = 5.0;
}

/// Mixing sequence parameters
pub mod mixing {
    /// Largest jitter allowed, as a fraction of the progress step
    pub const MAX_JITTER_FRACTION: f64 = 0.1;

    /// Minimum number of colors for N-way mixing
    pub const MIN_COLORS: usize = 2;
}

/// Color-vision simulation and distinguishability
pub mod vision {
    /// Pairs closer than this ΔE under a simulation are flagged
    pub const MIN_DISTINGUISHABLE_DELTA_E: f64 = 3.0;

    pub const PROTANOMALY_BAND: (f64, f64) = (0.0, 60.0);
    pub const PROTANOMALY_HUE: f64 = 55.0;
    pub const PROTANOMALY_SATURATION: f64 = 0.5;

    pub const DEUTERANOMALY_BAND: (f64, f64) = (60.0, 150.0);
    pub const DEUTERANOMALY_HUE: f64 = 65.0;
    pub const DEUTERANOMALY_SATURATION: f64 = 0.6;

    pub const TRITANOMALY_BAND: (f64, f64) = (180.0, 270.0);
    pub const TRITANOMALY_HUE: f64 = 190.0;
    pub const TRITANOMALY_SATURATION: f64 = 0.6;
}

/// Classification thresholds
pub mod classification {
    /// L* below which a color is a dark tone
    pub const DARK_LIGHTNESS: f64 = 20.0;

    /// L* above which a color is a light tone
    pub const LIGHT_LIGHTNESS: f64 = 80.0;

    /// HSL saturation (fraction) below which a color is a gray tone
    pub const GRAY_SATURATION: f64 = 0.10;

    /// Width of each hue band in degrees
    pub const HUE_BAND_WIDTH: f64 = 30.0;
}
