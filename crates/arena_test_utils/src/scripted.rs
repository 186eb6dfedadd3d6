//! Random source with scripted outcomes.
//!
//! [`ScriptedSource`] answers each kind of draw from its own queue. When a
//! queue runs dry it falls back to a neutral answer: chances fail, jitter is
//! 1.0, the d100 roll is 100 (no critical below 1000 speed) and picks take
//! index 0. This pins combat math to exact values in tests.

use std::collections::VecDeque;

use arena_core::math::Fixed;
use arena_core::rng::RandomSource;

/// Counts of draws taken from a [`ScriptedSource`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawCounts {
    /// Calls to `chance`.
    pub chances: usize,
    /// Calls to `jitter`.
    pub jitters: usize,
    /// Calls to `roll_d100`.
    pub d100s: usize,
    /// Calls to `pick`.
    pub picks: usize,
}

/// Random source that replays scripted answers.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    chances: VecDeque<bool>,
    jitters: VecDeque<Fixed>,
    d100s: VecDeque<u32>,
    picks: VecDeque<usize>,
    default_chance: bool,
    default_jitter: Fixed,
    default_d100: u32,
    default_pick: usize,
    counts: DrawCounts,
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::neutral()
    }
}

impl ScriptedSource {
    /// No jitter, no criticals, every chance fails, every pick is index 0.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            chances: VecDeque::new(),
            jitters: VecDeque::new(),
            d100s: VecDeque::new(),
            picks: VecDeque::new(),
            default_chance: false,
            default_jitter: Fixed::ONE,
            default_d100: 100,
            default_pick: 0,
            counts: DrawCounts::default(),
        }
    }

    /// Queue answers for `chance`.
    #[must_use]
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    /// Queue answers for `jitter`.
    #[must_use]
    pub fn with_jitters(mut self, jitters: impl IntoIterator<Item = Fixed>) -> Self {
        self.jitters.extend(jitters);
        self
    }

    /// Queue answers for `roll_d100`.
    #[must_use]
    pub fn with_d100s(mut self, rolls: impl IntoIterator<Item = u32>) -> Self {
        self.d100s.extend(rolls);
        self
    }

    /// Queue answers for `pick`.
    #[must_use]
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Answer every unscripted `chance` with `value`.
    #[must_use]
    pub fn always_chance(mut self, value: bool) -> Self {
        self.default_chance = value;
        self
    }

    /// Answer every unscripted `roll_d100` with `value`.
    #[must_use]
    pub fn always_d100(mut self, value: u32) -> Self {
        self.default_d100 = value;
        self
    }

    /// Answer every unscripted `pick` with `value` (clamped to the range asked for).
    #[must_use]
    pub fn always_pick(mut self, value: usize) -> Self {
        self.default_pick = value;
        self
    }

    /// Number of draws taken so far.
    #[must_use]
    pub fn counts(&self) -> DrawCounts {
        self.counts
    }
}

impl RandomSource for ScriptedSource {
    fn chance(&mut self, _percent: u32) -> bool {
        self.counts.chances += 1;
        self.chances.pop_front().unwrap_or(self.default_chance)
    }

    fn jitter(&mut self) -> Fixed {
        self.counts.jitters += 1;
        self.jitters.pop_front().unwrap_or(self.default_jitter)
    }

    fn roll_d100(&mut self) -> u32 {
        self.counts.d100s += 1;
        self.d100s.pop_front().unwrap_or(self.default_d100)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.counts.picks += 1;
        let pick = self.picks.pop_front().unwrap_or(self.default_pick);
        pick.min(len.saturating_sub(1))
    }
}
