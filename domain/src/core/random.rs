//! Random source strategy
//!
//! Classifiers draw scores (and, for neutral inputs, outcomes) from a
//! [`RandomSource`] handed in by the caller. Production code uses
//! [`StdRandom`]; tests pin draws with [`SequenceRandom`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform integers.
pub trait RandomSource: Send {
    /// Return a uniform integer in `0..upper`. Returns 0 when `upper` is 0.
    fn next_below(&mut self, upper: u32) -> u32;
}

/// [`RandomSource`] backed by `rand`'s standard generator.
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seed from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible runs (`--seed`).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandom {
    fn next_below(&mut self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        self.rng.gen_range(0..upper)
    }
}

/// Replays a fixed cycle of values, each reduced modulo the requested bound.
///
/// # Example
///
/// ```
/// use veracity_domain::core::random::{RandomSource, SequenceRandom};
///
/// let mut random = SequenceRandom::new([1, 7]);
/// assert_eq!(random.next_below(3), 1);
/// assert_eq!(random.next_below(5), 2);
/// assert_eq!(random.next_below(3), 1); // wraps around
/// ```
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Always returns zero (lowest score of every band, first outcome).
    pub fn zeros() -> Self {
        Self::new([0])
    }
}

impl RandomSource for SequenceRandom {
    fn next_below(&mut self, upper: u32) -> u32 {
        if upper == 0 || self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % upper
    }
}

/// Fisher-Yates shuffle driven by a [`RandomSource`].
pub fn shuffle<T>(items: &mut [T], random: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = random.next_below((i + 1) as u32) as usize;
        items.swap(i, j);
    }
}
