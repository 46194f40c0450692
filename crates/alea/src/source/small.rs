use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{Unavailable, WORD_MAX, WordSource};

/// A [`WordSource`] backed by rand's [`SmallRng`].
///
/// Fast and non-cryptographic. The generator is seeded once from the
/// thread-local RNG (`rand::rng()`) and then owned by this source, so draws
/// never touch thread-local state.
#[derive(Clone, Debug)]
pub struct SmallSource {
    rng: SmallRng,
}

impl SmallSource {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible stream for tests and benchmarks.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for SmallSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSource for SmallSource {
    fn word_max(&self) -> u32 {
        WORD_MAX
    }

    fn next_word(&mut self) -> Result<u32, Unavailable> {
        Ok(self.rng.random_range(0..WORD_MAX))
    }

    fn next_between(&mut self, min: i64, max: i64) -> Result<i64, Unavailable> {
        Ok(self.rng.random_range(min..=max))
    }
}
