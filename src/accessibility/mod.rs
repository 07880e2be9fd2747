//! Accessibility advisor
//!
//! Simulates color-vision deficiencies over a palette and reports pairs of
//! entries that become hard to distinguish. The WCAG suggestion search lives
//! with the contrast computation in [`crate::difference::contrast`].

pub mod report;
pub mod vision;

pub use report::{AccessibilityReport, DistinguishabilityIssue};
pub use vision::{
    monochrome, simulate_color_blindness, ColorBlindnessSimulation, HueBandShift,
    VisionDeficiency, VisionSimulator,
};
