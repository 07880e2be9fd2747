//! Color classification and harmonies

pub mod classify;
pub mod harmony;

pub use classify::{classify, ColorCategory, ColorClassifier};
pub use harmony::{harmonies, Harmonies};
