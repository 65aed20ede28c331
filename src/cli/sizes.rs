/*!
 * Process Size Sources
 * Where the front end gets the size of each new process
 */

use crate::core::types::Size;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Supplies the requested size for each new process
pub trait SizeSource {
    /// Next size in KB, normally within `1..=max`
    fn next_size(&mut self, max: Size) -> Size;
}

/// Uniformly random sizes in `1..=max`
#[derive(Debug, Clone)]
pub struct RandomSizes {
    rng: StdRng,
}

impl RandomSizes {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl SizeSource for RandomSizes {
    fn next_size(&mut self, max: Size) -> Size {
        if max == 0 {
            return 0;
        }
        self.rng.gen_range(1..=max)
    }
}

/// Scripted sizes, then `max` once exhausted
#[derive(Debug, Clone, Default)]
pub struct FixedSizes {
    sizes: VecDeque<Size>,
}

impl FixedSizes {
    pub fn new(sizes: impl IntoIterator<Item = Size>) -> Self {
        Self {
            sizes: sizes.into_iter().collect(),
        }
    }
}

impl SizeSource for FixedSizes {
    fn next_size(&mut self, max: Size) -> Size {
        self.sizes.pop_front().unwrap_or(max)
    }
}
