//! Injectable randomness for slot shuffling and recipe selection.
//!
//! The planner never touches a global RNG. Callers pass a [`RandomSource`]:
//! [`RngSource`] wraps any `rand` generator, and [`ScriptedRandom`] replays a
//! fixed sequence so tests can assert exact picks.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniform draws.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "next_index called with empty range");
        let idx = (self.next_f64() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }
}

/// Adapter from a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl RngSource<ThreadRng> {
    /// Thread-local OS-seeded generator.
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible generator for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when it runs out.
///
/// Values are clamped into `[0, 1)`. An empty script always yields 0.0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }

    /// Always returns the same draw.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            self.next += 1;
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Uniform pick, `None` for an empty slice.
pub fn pick_uniform<'a, T>(items: &'a [T], rng: &mut dyn RandomSource) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.next_index(items.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_cycles() {
        let mut rng = ScriptedRandom::new(vec![0.1, 0.9]);
        assert_eq!(rng.next_f64(), 0.1);
        assert_eq!(rng.next_f64(), 0.9);
        assert_eq!(rng.next_f64(), 0.1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_next_index_stays_in_range() {
        let mut rng = ScriptedRandom::constant(1.0);
        assert_eq!(rng.next_index(4), 3);
        let mut rng = ScriptedRandom::constant(0.0);
        assert_eq!(rng.next_index(4), 0);
        let mut rng = ScriptedRandom::constant(0.5);
        assert_eq!(rng.next_index(4), 2);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut items: Vec<u32> = (0..20).collect();
        let mut rng = RngSource::seeded(42);
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_with_zero_draws_rotates() {
        // Always drawing index 0 swaps each position with the front.
        let mut items = vec!['a', 'b', 'c'];
        let mut rng = ScriptedRandom::constant(0.0);
        shuffle(&mut items, &mut rng);
        assert_eq!(items, vec!['b', 'c', 'a']);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        for _ in 0..10 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn test_pick_uniform() {
        let empty: Vec<u8> = vec![];
        let mut rng = ScriptedRandom::constant(0.7);
        assert_eq!(pick_uniform(&empty, &mut rng), None);
        assert_eq!(pick_uniform(&[1, 2, 3], &mut rng), Some(&3));
    }
}
