//! Color mixing
//!
//! Pairwise and N-way blends with provenance records, plus lazily generated
//! animation sequences for gradual mixing displays.

pub mod mixer;
pub mod sequence;

pub use mixer::{generate_mix_sequence, mix, mix_many, ColorMixer};
pub use sequence::{Frames, Jitter, MixFrame, MixSequence};
