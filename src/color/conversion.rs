//! Color space conversion utilities
//!
//! Provides conversions between the canonical 8-bit sRGB form and:
//! - hexadecimal strings (`#RRGGBB`, `#RGB`)
//! - HSL (display form and unrounded fractions)
//! - CIE Lab / LCh under D65
//! - CIE 1931 xy chromaticity
//!
//! Lab, LCh and XYZ go through the `palette` crate, which applies the sRGB
//! piecewise transfer curve and the D65 reference white.

use palette::white_point::D65;
use palette::{FromColor, Srgb};

use crate::color::model::{Chromaticity, Hsl, Lab, Lch, Rgb};
use crate::constants::{d65, srgb};
use crate::{PaletteError, Result};

type PaletteLab = palette::Lab<D65, f64>;
type PaletteLch = palette::Lch<D65, f64>;
type PaletteXyz = palette::Xyz<D65, f64>;

/// Round to 2 decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Wrap an angle in degrees into [0, 360)
pub(crate) fn normalize_hue(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn to_srgb(rgb: Rgb) -> Srgb<f64> {
    let [r, g, b] = rgb.channels();
    Srgb::<f64>::new(r / 255.0, g / 255.0, b / 255.0)
}

fn from_srgb(srgb: Srgb<f64>) -> Rgb {
    let channel = |v: f64| if v.is_finite() { v * 255.0 } else { 0.0 };
    Rgb::from_finite_channels(channel(srgb.red), channel(srgb.green), channel(srgb.blue))
}

/// Encode real-valued channels as an uppercase `#RRGGBB` string
///
/// Channels outside [0, 255] are clamped, then rounded.
///
/// # Errors
///
/// Returns `InvalidColorFormat` if any channel is NaN or infinite
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> Result<String> {
    Ok(Rgb::from_channels(r, g, b)?.to_hex())
}

/// Parse a hexadecimal color string
///
/// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB` in any letter case; the
/// 3-digit form is expanded by doubling each nibble.
///
/// # Errors
///
/// Returns `InvalidColorFormat` for any other length or a non-hex digit
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(PaletteError::invalid_color(hex, format!("'{}' is not a hex digit", bad)));
    }

    let nibbles: Vec<u8> = digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|d| d as u8)
        .collect();

    match nibbles.as_slice() {
        [r, g, b] => Ok(Rgb::new(r * 17, g * 17, b * 17)),
        [r1, r2, g1, g2, b1, b2] => Ok(Rgb::new(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
        _ => Err(PaletteError::invalid_color(
            hex,
            format!("expected 3 or 6 hex digits, got {}", nibbles.len()),
        )),
    }
}

/// Unrounded HSL with hue in degrees and saturation/lightness as fractions
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HslFraction {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl HslFraction {
    pub fn from_rgb(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.channels().map(|c| c / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta <= f64::EPSILON {
            return Self { h: 0.0, s: 0.0, l };
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 1.0),
            l,
        }
    }

    pub fn to_rgb(self) -> Rgb {
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = normalize_hue(self.h) / 60.0;
        let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match sector as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Rgb::from_finite_channels((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0)
    }

    pub fn with_hue(self, h: f64) -> Self {
        Self {
            h: normalize_hue(h),
            ..self
        }
    }
}

/// Convert RGB to HSL display form
///
/// Hue is rounded to integer degrees (0 for achromatic colors), saturation
/// and lightness to integer percent.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let hsl = HslFraction::from_rgb(rgb);
    let s = (hsl.s * 100.0).round();
    let h = if s == 0.0 { 0.0 } else { hsl.h.round() % 360.0 };
    Hsl {
        h,
        s,
        l: (hsl.l * 100.0).round(),
    }
}

/// Convert HSL display form (degrees, percent) back to RGB
///
/// The display form is rounded to integer percent, so `rgb_to_hsl` followed
/// by `hsl_to_rgb` can drift by a few units per channel (`#00004B` comes back
/// as `#00004D`). Exact round-trips go through hex or Lab instead.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    HslFraction {
        h: hsl.h,
        s: hsl.s / 100.0,
        l: hsl.l / 100.0,
    }
    .to_rgb()
}

/// Unrounded Lab, used wherever results feed further arithmetic
pub(crate) fn lab_exact(rgb: Rgb) -> Lab {
    let lab = PaletteLab::from_color(to_srgb(rgb));
    Lab::new(lab.l, lab.a, lab.b)
}

/// Convert RGB to CIE Lab (D65)
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    let lab = lab_exact(rgb);
    Lab::new(round2(lab.l), round2(lab.a), round2(lab.b))
}

/// Convert CIE Lab (D65) to RGB, clamping out-of-gamut values
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    let srgb = Srgb::<f64>::from_color(PaletteLab::new(lab.l, lab.a, lab.b));
    from_srgb(srgb)
}

/// Convert Lab to its cylindrical LCh form
pub fn lab_to_lch(lab: Lab) -> Lch {
    let lch = PaletteLch::from_color(PaletteLab::new(lab.l, lab.a, lab.b));
    let c = round2(lch.chroma);
    let h = if c == 0.0 {
        0.0
    } else {
        normalize_hue(round2(lch.hue.into_positive_degrees()))
    };
    Lch { l: round2(lch.l), c, h }
}

/// Convert LCh back to Lab
pub fn lch_to_lab(lch: Lch) -> Lab {
    let lab = PaletteLab::from_color(PaletteLch::new(lch.l, lch.c, lch.h));
    Lab::new(round2(lab.l), round2(lab.a), round2(lab.b))
}

/// Convert RGB to CIE LCh (D65)
pub fn rgb_to_lch(rgb: Rgb) -> Lch {
    lab_to_lch(lab_exact(rgb))
}

/// Convert RGB to CIE 1931 xy chromaticity
///
/// Black has no chromaticity; it reports the D65 white point instead.
pub fn rgb_to_xy_chromaticity(rgb: Rgb) -> Chromaticity {
    let xyz = PaletteXyz::from_color(to_srgb(rgb));
    let sum = xyz.x + xyz.y + xyz.z;

    if sum <= f64::EPSILON {
        return Chromaticity {
            x: round2(d65::CHROMATICITY_X),
            y: round2(d65::CHROMATICITY_Y),
        };
    }

    Chromaticity {
        x: round2(xyz.x / sum),
        y: round2(xyz.y / sum),
    }
}

/// Decode one sRGB channel in [0, 1] to linear light
pub(crate) fn linearize(channel: f64) -> f64 {
    if channel <= srgb::LINEAR_THRESHOLD {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(srgb::GAMMA)
    }
}

/// Encode linear light in [0, 1] to one sRGB channel
pub(crate) fn delinearize(linear: f64) -> f64 {
    let linear = linear.clamp(0.0, 1.0);
    if linear <= srgb::ENCODED_THRESHOLD {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / srgb::GAMMA) - 0.055
    }
}

/// WCAG relative luminance in [0, 1]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let [wr, wg, wb] = srgb::LUMINANCE_WEIGHTS;
    let [r, g, b] = rgb.channels().map(|c| linearize(c / 255.0));
    wr * r + wg * g + wb * b
}
