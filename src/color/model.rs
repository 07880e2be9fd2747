//! Immutable color value types
//!
//! `Rgb` is the canonical representation; every other space is derived from
//! it by [`crate::color::conversion`]. `ColorInfo` and `MixedColor` are the
//! records exchanged with UI and storage collaborators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::conversion;
use crate::naming::ColorClassifier;
use crate::{PaletteError, Result};

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from real-valued channels, clamping to [0, 255] and rounding
    ///
    /// # Errors
    ///
    /// Returns `InvalidColorFormat` if any channel is NaN or infinite
    pub fn from_channels(r: f64, g: f64, b: f64) -> Result<Self> {
        for (name, value) in [("red", r), ("green", g), ("blue", b)] {
            if !value.is_finite() {
                return Err(PaletteError::invalid_color(
                    format!("rgb({}, {}, {})", r, g, b),
                    format!("{} channel is not a finite number", name),
                ));
            }
        }
        Ok(Self::from_finite_channels(r, g, b))
    }

    /// Clamp and round channels already known to be finite
    pub(crate) fn from_finite_channels(r: f64, g: f64, b: f64) -> Self {
        let quantize = |v: f64| v.clamp(0.0, 255.0).round() as u8;
        Self::new(quantize(r), quantize(g), quantize(b))
    }

    /// Parse a 3- or 6-digit hex string, with or without `#`
    pub fn from_hex(hex: &str) -> Result<Self> {
        conversion::hex_to_rgb(hex)
    }

    /// Uppercase `#RRGGBB` representation
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub(crate) fn channels(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }

    /// Per-channel linear interpolation in encoded sRGB, rounded to integers
    pub(crate) fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let [r1, g1, b1] = self.channels();
        let [r2, g2, b2] = other.channels();
        Rgb::from_finite_channels(
            r1 + (r2 - r1) * t,
            g1 + (g2 - g1) * t,
            b1 + (b2 - b1) * t,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// HSL display form: hue in integer degrees, saturation and lightness in
/// integer percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// CIE L*a*b* (D65), components rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

/// CIE LCh(ab), the cylindrical form of [`Lab`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// CIE 1931 xy chromaticity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

/// A palette entry as exchanged with display and storage collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorInfo {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub name: String,
    pub id: Uuid,
}

impl ColorInfo {
    /// Create an entry named after its color category
    pub fn from_rgb(rgb: Rgb) -> Self {
        let name = ColorClassifier::new().classify_rgb(rgb).label().to_string();
        Self::named(rgb, name)
    }

    /// Parse a hex string into a new entry
    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(Self::from_rgb(Rgb::from_hex(hex)?))
    }

    /// Replace the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub(crate) fn named(rgb: Rgb, name: String) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: conversion::rgb_to_hsl(rgb),
            name,
            id: Uuid::new_v4(),
        }
    }

    /// Re-derive the entry for a different color, keeping id and name
    pub(crate) fn recolored(&self, rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: conversion::rgb_to_hsl(rgb),
            name: self.name.clone(),
            id: self.id,
        }
    }
}

/// Result of a blend, carrying its provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixedColor {
    #[serde(flatten)]
    pub color: ColorInfo,
    pub parent_colors: Vec<Uuid>,
    pub ratio: Vec<f64>,
}

impl From<MixedColor> for ColorInfo {
    fn from(mixed: MixedColor) -> Self {
        mixed.color
    }
}

impl AsRef<ColorInfo> for MixedColor {
    fn as_ref(&self) -> &ColorInfo {
        &self.color
    }
}

/// Anything that carries a hex color code
///
/// The difference engine accepts any `HexColor` and treats the hex string as
/// the source of truth, so records deserialized from untrusted storage are
/// re-validated on every comparison.
pub trait HexColor {
    fn hex_code(&self) -> &str;
}

impl HexColor for str {
    fn hex_code(&self) -> &str {
        self
    }
}

impl HexColor for String {
    fn hex_code(&self) -> &str {
        self
    }
}

impl HexColor for ColorInfo {
    fn hex_code(&self) -> &str {
        &self.hex
    }
}

impl HexColor for MixedColor {
    fn hex_code(&self) -> &str {
        &self.color.hex
    }
}

impl<T: HexColor + ?Sized> HexColor for &T {
    fn hex_code(&self) -> &str {
        (**self).hex_code()
    }
}
