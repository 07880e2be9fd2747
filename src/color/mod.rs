//! Color value types and space conversion
//!
//! This module holds the canonical RGB representation, the derived HSL,
//! Lab, LCh and chromaticity forms, and the palette records built on them.

pub mod conversion;
pub mod model;

pub use conversion::{
    hex_to_rgb, hsl_to_rgb, lab_to_lch, lab_to_rgb, lch_to_lab, relative_luminance, rgb_to_hex,
    rgb_to_hsl, rgb_to_lab, rgb_to_lch, rgb_to_xy_chromaticity,
};
pub use model::{Chromaticity, ColorInfo, HexColor, Hsl, Lab, Lch, MixedColor, Rgb};
