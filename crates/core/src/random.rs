use std::num::NonZeroUsize;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random indices, swappable for deterministic tests.
#[derive(Debug, Clone, Default)]
pub enum RandomSource {
    /// Thread-local process RNG.
    #[default]
    Thread,
    /// Reproducible sequence from a seed.
    Seeded(StdRng),
    /// Always `value % bound`.
    Fixed(usize),
}

impl RandomSource {
    #[must_use]
    pub fn thread() -> Self {
        Self::Thread
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn fixed(value: usize) -> Self {
        Self::Fixed(value)
    }

    /// Seeded when a seed is given, thread RNG otherwise.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::Thread, Self::seeded)
    }

    /// Returns an integer in `[0, bound)`.
    pub fn random_int(&mut self, bound: NonZeroUsize) -> usize {
        let bound = bound.get();
        match self {
            Self::Thread => rand::rng().random_range(0..bound),
            Self::Seeded(rng) => rng.random_range(0..bound),
            Self::Fixed(value) => *value % bound,
        }
    }
}
