//! Matchup statistics over many seeded battles.
//!
//! Runs the same pairing across a range of seeds and tallies the outcomes.
//! Useful for checking that a modifier (rarity, speed, a Defend-heavy
//! stat line) moves win rates in the expected direction.

use std::ops::Range;

use arena_core::battle::{run_battle, BattleConfig};
use arena_core::catalog::FighterCatalog;
use arena_core::error::Result;
use arena_core::rng::SeededSource;

/// Outcome tallies for one pairing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchupStats {
    /// Total battles run.
    pub total_battles: u32,
    /// Wins for the first-listed fighter.
    pub wins_first: u32,
    /// Wins for the second-listed fighter.
    pub wins_second: u32,
    /// Draws (turn cap or double knockout).
    pub draws: u32,
    /// Average turns to resolution.
    pub avg_turns: f64,
}

impl MatchupStats {
    /// Win rate for the first fighter (0.0 to 1.0).
    pub fn win_rate_first(&self) -> f64 {
        if self.total_battles == 0 {
            return 0.5;
        }
        f64::from(self.wins_first) / f64::from(self.total_battles)
    }

    /// Win rate for the second fighter (0.0 to 1.0).
    pub fn win_rate_second(&self) -> f64 {
        if self.total_battles == 0 {
            return 0.5;
        }
        f64::from(self.wins_second) / f64::from(self.total_battles)
    }

    /// Check if the first fighter's win rate falls inside `[min_rate, max_rate]`.
    pub fn is_balanced(&self, min_rate: f64, max_rate: f64) -> bool {
        let rate = self.win_rate_first();
        rate >= min_rate && rate <= max_rate
    }
}

/// Fight `first_id` against `second_id` once per seed in `seeds`.
///
/// # Errors
///
/// Returns an error if either id is missing from the catalog.
pub fn run_matchup<C: FighterCatalog + ?Sized>(
    catalog: &C,
    first_id: &str,
    second_id: &str,
    config: BattleConfig,
    seeds: Range<u64>,
) -> Result<MatchupStats> {
    let mut stats = MatchupStats::default();
    let mut total_turns = 0u64;

    for seed in seeds {
        let mut rng = SeededSource::from_seed(seed);
        let result = run_battle(catalog, first_id, second_id, config, &mut rng)?;

        stats.total_battles += 1;
        total_turns += u64::from(result.turns);
        match result.winner_id.as_deref() {
            None => stats.draws += 1,
            Some(id) if id == first_id => stats.wins_first += 1,
            Some(_) => stats.wins_second += 1,
        }
    }

    if stats.total_battles > 0 {
        stats.avg_turns = total_turns as f64 / f64::from(stats.total_battles);
    }

    tracing::debug!(
        first = first_id,
        second = second_id,
        battles = stats.total_battles,
        win_rate_first = stats.win_rate_first(),
        "Matchup complete"
    );

    Ok(stats)
}
