//! Seedable randomness for tile spawning and simulated play

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the random choices the game makes
///
/// Spawn value, spawn cell and simulated move choice all go through this
/// trait, so a fixed seed (or a scripted implementation in tests) makes every
/// game reproducible.
pub trait RandomSource {
    /// Uniform sample from `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`; returns 0 when `len` is 0
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

/// Seeded random source backed by `StdRng`
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}
