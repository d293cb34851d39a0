//! Random choice behind a seedable source.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Uniform random picker. A fixed seed gives a reproducible sequence.
#[derive(Debug, Clone)]
pub struct Picker {
    rng: StdRng,
}

impl Picker {
    /// Picker seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, otherwise from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }

    /// Choose one item uniformly. `None` only for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::from_entropy()
    }
}
