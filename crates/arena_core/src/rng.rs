//! Injectable random source.
//!
//! Every random decision in a battle (move-probability rolls, damage jitter,
//! critical rolls, ability choice, draw tie-breaks) is drawn through
//! [`RandomSource`]. Production code uses [`SeededSource`]; tests substitute a
//! source with pinned outcomes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::math::{from_percent, Fixed};

/// Lower bound of the damage jitter factor, as a percentage.
pub const JITTER_MIN_PERCENT: u32 = 85;

/// Upper bound of the damage jitter factor, as a percentage.
pub const JITTER_MAX_PERCENT: u32 = 115;

/// Source of every random decision made by the core.
pub trait RandomSource {
    /// Returns `true` with probability `percent / 100`. Values above 100 always succeed.
    fn chance(&mut self, percent: u32) -> bool;

    /// Damage jitter factor, uniform in `[0.85, 1.15]`.
    fn jitter(&mut self) -> Fixed;

    /// Uniform integer in `[1, 100]`.
    fn roll_d100(&mut self) -> u32;

    /// Uniform index in `[0, len)`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn chance(&mut self, percent: u32) -> bool {
        (**self).chance(percent)
    }

    fn jitter(&mut self) -> Fixed {
        (**self).jitter()
    }

    fn roll_d100(&mut self) -> u32 {
        (**self).roll_d100()
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Seeded random source for reproducible battles.
///
/// The same seed always produces the same sequence of decisions, so a
/// battle or tournament can be replayed exactly from its seed.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Create a source with a specific seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a fresh seed from the thread-local generator.
    ///
    /// Callers without a configured seed use this and report it, so even an
    /// unplanned run can be replayed.
    #[must_use]
    pub fn random_seed() -> u64 {
        rand::random()
    }
}

impl RandomSource for SeededSource {
    fn chance(&mut self, percent: u32) -> bool {
        self.rng.gen_ratio(percent.min(100), 100)
    }

    fn jitter(&mut self) -> Fixed {
        let min = from_percent(JITTER_MIN_PERCENT).to_bits();
        let max = from_percent(JITTER_MAX_PERCENT).to_bits();
        Fixed::from_bits(self.rng.gen_range(min..=max))
    }

    fn roll_d100(&mut self) -> u32 {
        self.rng.gen_range(1..=100)
    }

    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Source with fixed answers, for unit tests inside this crate.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct PinnedSource {
    pub chance: bool,
    pub jitter: Fixed,
    pub d100: u32,
    pub pick: usize,
}

#[cfg(test)]
impl PinnedSource {
    /// Jitter 1.0, never critical, every chance fails, always picks index 0.
    pub fn neutral() -> Self {
        Self {
            chance: false,
            jitter: Fixed::ONE,
            d100: 100,
            pick: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for PinnedSource {
    fn chance(&mut self, _percent: u32) -> bool {
        self.chance
    }

    fn jitter(&mut self) -> Fixed {
        self.jitter
    }

    fn roll_d100(&mut self) -> u32 {
        self.d100
    }

    fn pick(&mut self, len: usize) -> usize {
        self.pick.min(len.saturating_sub(1))
    }
}
