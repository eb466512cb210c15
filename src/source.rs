//! Random Source
//!
//! Every randomized choice the generator makes goes through [`RandomSource`],
//! so the production sampler can be swapped for a seeded or scripted one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sampling capabilities needed to build log records.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform integer in `low..=high`.
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32;

    /// Uniform float in `low..=high`.
    fn float_inclusive(&mut self, low: f64, high: f64) -> f64;

    /// `true` with the given probability (clamped to `0.0..=1.0`).
    fn chance(&mut self, probability: f64) -> bool;
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Seeded from OS entropy; differs on every run.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible generator for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// `seeded` when a seed is given, `from_entropy` otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }

    fn float_inclusive(&mut self, low: f64, high: f64) -> f64 {
        self.rng.random_range(low..=high)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }

    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        (**self).int_inclusive(low, high)
    }

    fn float_inclusive(&mut self, low: f64, high: f64) -> f64 {
        (**self).float_inclusive(low, high)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }
}

/// Replays queued answers in order, one queue per capability.
///
/// An exhausted queue falls back to the low end of the requested range
/// (index 0, `low`, `false`).
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    pub indices: std::collections::VecDeque<usize>,
    pub ints: std::collections::VecDeque<u32>,
    pub floats: std::collections::VecDeque<f64>,
    pub chances: std::collections::VecDeque<bool>,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indices(mut self, values: &[usize]) -> Self {
        self.indices.extend(values);
        self
    }

    pub fn ints(mut self, values: &[u32]) -> Self {
        self.ints.extend(values);
        self
    }

    pub fn floats(mut self, values: &[f64]) -> Self {
        self.floats.extend(values);
        self
    }

    pub fn chances(mut self, values: &[bool]) -> Self {
        self.chances.extend(values);
        self
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn index(&mut self, len: usize) -> usize {
        let i = self.indices.pop_front().unwrap_or(0);
        assert!(i < len, "scripted index {i} out of bounds for {len}");
        i
    }

    fn int_inclusive(&mut self, low: u32, _high: u32) -> u32 {
        self.ints.pop_front().unwrap_or(low)
    }

    fn float_inclusive(&mut self, low: f64, _high: f64) -> f64 {
        self.floats.pop_front().unwrap_or(low)
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.int_inclusive(0, 1_000_000), b.int_inclusive(0, 1_000_000));
        }
    }

    #[test]
    fn test_seed_option() {
        let mut fixed = RngSource::from_seed_option(Some(11));
        let mut again = RngSource::seeded(11);
        assert_eq!(fixed.index(1_000), again.index(1_000));

        let mut random = RngSource::from_seed_option(None);
        assert!(random.index(10) < 10);
    }

    #[test]
    fn test_ranges_are_inclusive_and_bounded() {
        let mut source = RngSource::seeded(1);
        let mut saw_low = false;
        let mut saw_high = false;
        for _ in 0..2_000 {
            let v = source.int_inclusive(0, 3);
            assert!(v <= 3);
            saw_low |= v == 0;
            saw_high |= v == 3;

            let f = source.float_inclusive(0.001, 2.5);
            assert!((0.001..=2.5).contains(&f));

            assert!(source.index(5) < 5);
        }
        assert!(saw_low && saw_high);
    }

    #[test]
    fn test_chance_extremes() {
        let mut source = RngSource::from_entropy();
        assert!((0..100).all(|_| source.chance(1.0)));
        assert!((0..100).all(|_| !source.chance(0.0)));
        // Out-of-range probabilities are clamped rather than panicking.
        assert!(source.chance(7.0));
        assert!(!source.chance(-1.0));
    }

    #[test]
    fn test_scripted_replays_in_order() {
        let mut source = ScriptedSource::new()
            .indices(&[2, 1])
            .ints(&[10])
            .chances(&[true]);
        assert_eq!(source.index(3), 2);
        assert_eq!(source.index(3), 1);
        assert_eq!(source.index(3), 0);
        assert_eq!(source.int_inclusive(5, 20), 10);
        assert_eq!(source.int_inclusive(5, 20), 5);
        assert!(source.chance(0.5));
        assert!(!source.chance(0.5));
    }
}
