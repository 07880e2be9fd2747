//! Animated mix sequences
//!
//! A [`MixSequence`] describes a gradual transition from the first color of a
//! palette to its sequential N-way blend. Frames are produced lazily and every
//! traversal replays the same frames, including jitter, because the random
//! source is re-seeded from a stored seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::mixing::mixer::cumulative_mixes;

/// Source of the per-frame progress perturbation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jitter {
    /// Frames sit exactly at `i / steps`
    None,
    /// Reproducible jitter from a fixed seed
    Seeded(u64),
    /// Jitter from a seed drawn once when the sequence is built
    Random,
}

/// One frame of a mix animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixFrame {
    /// Position in the transition, in [0, 1]
    pub progress: f64,
    pub color: Rgb,
}

impl MixFrame {
    pub fn hex(&self) -> String {
        self.color.to_hex()
    }
}

/// A finite, restartable mix animation of `steps + 1` frames
#[derive(Debug, Clone, PartialEq)]
pub struct MixSequence {
    colors: Vec<Rgb>,
    cumulative: Vec<Rgb>,
    steps: usize,
    jitter_fraction: f64,
    seed: Option<u64>,
}

impl MixSequence {
    /// `colors` must hold at least two entries and `steps` must be non-zero
    pub(crate) fn new(colors: Vec<Rgb>, steps: usize, jitter_fraction: f64, jitter: Jitter) -> Self {
        let seed = match jitter {
            Jitter::None => None,
            Jitter::Seeded(seed) => Some(seed),
            Jitter::Random => Some(rand::random()),
        };
        let cumulative = cumulative_mixes(&colors);
        log::debug!(
            "Mix sequence over {} colors, {} steps, jitter {:?}",
            colors.len(),
            steps,
            jitter
        );

        Self {
            colors,
            cumulative,
            steps,
            jitter_fraction,
            seed,
        }
    }

    /// Number of frames, always `steps + 1`
    pub fn len(&self) -> usize {
        self.steps + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Iterate the frames from progress 0 to progress 1
    pub fn frames(&self) -> Frames<'_> {
        Frames {
            sequence: self,
            index: 0,
            rng: self.seed.map(StdRng::seed_from_u64),
        }
    }

    /// The blend of all colors, reached at progress 1
    pub fn final_color(&self) -> Rgb {
        self.cumulative[self.cumulative.len() - 1]
    }

    /// Color at an arbitrary progress value (clamped to [0, 1])
    ///
    /// Progress is split into `N - 1` equal stages. Stage `k` moves from the
    /// running mix of colors `0..=k` toward color `k + 1`, reaching weight
    /// `1 / (k + 2)` at its end so stage boundaries coincide with the
    /// sequential reduction steps.
    pub fn color_at(&self, progress: f64) -> Rgb {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let stages = self.colors.len() - 1;
        let scaled = progress * stages as f64;
        let stage = (scaled.floor() as usize).min(stages - 1);
        let local = scaled - stage as f64;
        let weight = local / (stage + 2) as f64;

        self.cumulative[stage].lerp(self.colors[stage + 1], weight)
    }
}

impl<'a> IntoIterator for &'a MixSequence {
    type Item = MixFrame;
    type IntoIter = Frames<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames()
    }
}

/// Lazy frame iterator over a [`MixSequence`]
#[derive(Debug)]
pub struct Frames<'a> {
    sequence: &'a MixSequence,
    index: usize,
    rng: Option<StdRng>,
}

impl Iterator for Frames<'_> {
    type Item = MixFrame;

    fn next(&mut self) -> Option<MixFrame> {
        let steps = self.sequence.steps;
        if self.index > steps {
            return None;
        }
        let index = self.index;
        self.index += 1;

        let base = index as f64 / steps as f64;
        let progress = match self.rng.as_mut() {
            Some(rng) if index != 0 && index != steps => {
                let offset = rng.gen_range(-1.0..=1.0) * self.sequence.jitter_fraction / steps as f64;
                (base + offset).clamp(0.0, 1.0)
            }
            _ => base,
        };

        Some(MixFrame {
            progress,
            color: self.sequence.color_at(progress),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.sequence.steps + 1).saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames<'_> {}

impl std::iter::FusedIterator for Frames<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(colors: &[Rgb], steps: usize, jitter: Jitter) -> MixSequence {
        MixSequence::new(colors.to_vec(), steps, 0.1, jitter)
    }

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);
    const WHITE: Rgb = Rgb::WHITE;

    #[test]
    fn test_frame_count_and_endpoints() {
        for steps in [1, 2, 7, 30] {
            let seq = sequence(&[RED, BLUE, WHITE], steps, Jitter::Seeded(7));
            let frames: Vec<MixFrame> = seq.frames().collect();
            assert_eq!(frames.len(), steps + 1);
            assert_eq!(seq.frames().len(), steps + 1);
            assert_eq!(frames[0].progress, 0.0);
            assert_eq!(frames[0].color, RED);
            assert_eq!(frames[steps].progress, 1.0);
            assert_eq!(frames[steps].color, seq.final_color());
        }
    }

    #[test]
    fn test_two_color_frames_without_jitter() {
        let seq = sequence(&[RED, BLUE], 4, Jitter::None);
        let progress: Vec<f64> = seq.frames().map(|f| f.progress).collect();
        assert_eq!(progress, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        let last = seq.frames().last().unwrap();
        assert_eq!(last.color, Rgb::new(128, 0, 128));
        assert_eq!(last.hex(), "#800080");
    }

    #[test]
    fn test_stage_boundaries_match_reduction() {
        let seq = sequence(&[RED, BLUE, WHITE], 2, Jitter::None);
        let colors: Vec<Rgb> = seq.frames().map(|f| f.color).collect();
        assert_eq!(colors, vec![RED, Rgb::new(128, 0, 128), Rgb::new(170, 85, 170)]);
    }

    #[test]
    fn test_jitter_bounded_and_monotonic() {
        let steps = 50;
        let seq = sequence(&[RED, BLUE, WHITE, Rgb::new(0, 128, 0)], steps, Jitter::Seeded(42));
        let frames: Vec<MixFrame> = seq.frames().collect();

        for (i, frame) in frames.iter().enumerate() {
            let base = i as f64 / steps as f64;
            assert!((0.0..=1.0).contains(&frame.progress));
            assert!((frame.progress - base).abs() <= 0.1 / steps as f64 + 1e-12);
        }
        for pair in frames.windows(2) {
            assert!(pair[0].progress < pair[1].progress);
        }
    }

    #[test]
    fn test_seeded_sequence_replays() {
        let seq = sequence(&[RED, BLUE, WHITE], 12, Jitter::Seeded(2024));
        let first: Vec<MixFrame> = seq.frames().collect();
        let second: Vec<MixFrame> = (&seq).into_iter().collect();
        assert_eq!(first, second);

        let again = sequence(&[RED, BLUE, WHITE], 12, Jitter::Seeded(2024));
        assert_eq!(first, again.frames().collect::<Vec<_>>());
    }

    #[test]
    fn test_random_sequence_replays() {
        let seq = sequence(&[RED, BLUE], 10, Jitter::Random);
        let first: Vec<MixFrame> = seq.frames().collect();
        let cloned = seq.clone();
        assert_eq!(first, cloned.frames().collect::<Vec<_>>());
    }

    #[test]
    fn test_color_at_clamps() {
        let seq = sequence(&[RED, BLUE], 3, Jitter::None);
        assert_eq!(seq.color_at(-1.0), RED);
        assert_eq!(seq.color_at(2.0), seq.final_color());
        assert_eq!(seq.color_at(f64::NAN), RED);
    }

    #[test]
    fn test_iterator_is_fused() {
        let seq = sequence(&[RED, BLUE], 1, Jitter::None);
        let mut frames = seq.frames();
        assert!(frames.next().is_some());
        assert!(frames.next().is_some());
        assert!(frames.next().is_none());
        assert!(frames.next().is_none());
    }
}
