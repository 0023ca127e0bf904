//! RNG module - seeded randomness for dungeon generation
//!
//! Generation must be reproducible from a seed, so every draw goes through a
//! [`DungeonRng`] wrapping a `ChaCha8Rng`. ChaCha output is stable across
//! platforms and `rand` releases, unlike `StdRng`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for generation.
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: ChaCha8Rng,
}

impl DungeonRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Random value in `[lo, hi)`.
    ///
    /// Returns `lo` when the range is empty, so callers never panic on
    /// degenerate bounds.
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    /// True with `percent` out of 100 odds.
    pub fn chance_percent(&mut self, percent: u32) -> bool {
        self.range(0, 100) < percent as i32
    }

    /// Fair coin flip.
    pub fn coin(&mut self) -> bool {
        self.range(0, 2) == 0
    }
}
