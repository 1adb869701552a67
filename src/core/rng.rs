//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine only talks to the `RandomSource` trait
//! - **Deterministic**: same seed produces identical word picks and hints
//!
//! ## Usage
//!
//! ```
//! use hangman_engine::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut same = GameRng::new(42);
//!
//! assert_eq!(rng.pick_index(5), same.pick_index(5));
//! assert_eq!(rng.sample_indices(23, 11), same.sample_indices(23, 11));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness used by the engine.
///
/// The engine needs exactly two things: one index to pick a word, and a
/// set of distinct indices to pick which letters a hint disables.
pub trait RandomSource {
    /// Pick an index in `0..len`. `len` is never zero.
    ///
    /// The engine reduces the result modulo `len`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Pick `amount` distinct indices in `0..len`, in any order.
    ///
    /// `amount` is clamped to `len`. Out-of-range or repeated indices are
    /// tolerated: the engine reduces them modulo `len` and fills any
    /// shortfall itself.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize>;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        (**self).sample_indices(len, amount)
    }
}

/// Seedable RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, len, amount.min(len)).into_vec()
    }
}

/// Replays a fixed script of values, for tests that need exact outcomes.
///
/// Each call consumes the next scripted value (cycling when exhausted,
/// `0` when the script is empty):
/// - `pick_index` returns `value % len`
/// - `sample_indices` returns `amount` consecutive indices starting at
///   `value % len`, wrapping around
#[derive(Clone, Debug, Default)]
pub struct SequenceSource {
    script: VecDeque<usize>,
}

impl SequenceSource {
    /// Create a source that replays `values` in order.
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: values.into_iter().collect(),
        }
    }

    fn next_value(&mut self) -> usize {
        match self.script.pop_front() {
            Some(value) => {
                self.script.push_back(value);
                value
            }
            None => 0,
        }
    }
}

impl RandomSource for SequenceSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.next_value() % len.max(1)
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        if len == 0 {
            return Vec::new();
        }
        let start = self.next_value() % len;
        (0..amount.min(len)).map(|offset| (start + offset) % len).collect()
    }
}
