//! Determinism testing utilities.
//!
//! Provides a harness for verifying that battles and tournaments produce
//! identical results given identical inputs and seeds.
//!
//! # Testing Strategy
//!
//! A seeded battle must replay exactly. Sources of non-determinism include:
//!
//! - **Floating-point math**: Damage uses fixed-point arithmetic via
//!   [`arena_core::math::Fixed`] throughout.
//!
//! - **HashMap iteration order**: Rosters iterate in insertion order and
//!   brackets follow the caller's id order.
//!
//! - **Hidden randomness**: Every roll goes through an injected
//!   [`RandomSource`]; nothing reads a global generator.
//!
//! # Test Levels
//!
//! 1. **Unit tests**: Pinned-roll formulas inside each core module
//! 2. **Property tests**: Random rosters and seeds still replay identically
//! 3. **Integration tests**: Full tournaments are reproducible from a seed

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use arena_core::battle::{run_battle, Battle, BattleConfig, BattleResult, Side};
use arena_core::catalog::FighterCatalog;
use arena_core::error::Result;
use arena_core::fighter::Fighter;
use arena_core::rng::{RandomSource, SeededSource};
use arena_core::tournament::{run_tournament, TournamentResult};

/// Result of a determinism test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterminismResult {
    /// Whether all runs produced identical results.
    pub is_deterministic: bool,
    /// Hashes from each run.
    pub hashes: Vec<u64>,
}

impl DeterminismResult {
    /// Get all unique hashes (should be 1 for a deterministic run).
    #[must_use]
    pub fn unique_hashes(&self) -> Vec<u64> {
        let mut unique: Vec<u64> = self.hashes.clone();
        unique.sort_unstable();
        unique.dedup();
        unique
    }

    /// Assert that every run matched, with a detailed error message.
    ///
    /// # Panics
    ///
    /// Panics if the runs produced different hashes.
    pub fn assert_deterministic(&self) {
        if !self.is_deterministic {
            let unique = self.unique_hashes();
            panic!(
                "Battle is non-deterministic!\n\
                 Runs: {}\n\
                 Unique hashes: {} (expected 1)\n\
                 All hashes: {:?}",
                self.hashes.len(),
                unique.len(),
                self.hashes
            );
        }
    }
}

/// Run `scenario` several times and verify every run hashes the same.
///
/// # Arguments
///
/// * `runs` - Number of times to run the scenario
/// * `scenario` - Produces one outcome from a fresh state
/// * `hash` - Function to compute the outcome hash
pub fn verify_determinism<T, Scenario, HashFn>(
    runs: usize,
    scenario: Scenario,
    hash: HashFn,
) -> DeterminismResult
where
    Scenario: Fn() -> T,
    HashFn: Fn(&T) -> u64,
{
    let hashes: Vec<u64> = (0..runs).map(|_| hash(&scenario())).collect();
    let is_deterministic = hashes.windows(2).all(|w| w[0] == w[1]);

    DeterminismResult {
        is_deterministic,
        hashes,
    }
}

/// Run the same seeded battle `runs` times and compare full results.
///
/// # Errors
///
/// Returns an error if either id is missing from the catalog.
pub fn verify_battle_determinism<C: FighterCatalog + ?Sized>(
    catalog: &C,
    first_id: &str,
    second_id: &str,
    config: BattleConfig,
    seed: u64,
    runs: usize,
) -> Result<DeterminismResult> {
    // Surface catalog errors once instead of hashing them.
    run_battle(catalog, first_id, second_id, config, &mut SeededSource::from_seed(seed))?;

    Ok(verify_determinism(
        runs,
        || {
            run_battle(catalog, first_id, second_id, config, &mut SeededSource::from_seed(seed))
        },
        compute_hash,
    ))
}

/// Run the same seeded tournament `runs` times and compare full results.
///
/// # Errors
///
/// Returns an error if the bracket is invalid.
pub fn verify_tournament_determinism<C, S>(
    catalog: &C,
    ids: &[S],
    config: BattleConfig,
    seed: u64,
    runs: usize,
) -> Result<DeterminismResult>
where
    C: FighterCatalog + ?Sized,
    S: AsRef<str>,
{
    run_tournament(catalog, ids, config, &mut SeededSource::from_seed(seed))?;

    Ok(verify_determinism(
        runs,
        || run_tournament(catalog, ids, config, &mut SeededSource::from_seed(seed)),
        compute_hash,
    ))
}

/// Step two copies of a battle side by side, finding the first turn where
/// their state differs.
///
/// Useful for debugging non-determinism by finding exactly when two runs
/// start to differ.
///
/// # Returns
///
/// `None` if both copies stay identical, `Some(turn)` otherwise.
pub fn find_first_divergence<R, F>(
    first: &Fighter,
    second: &Fighter,
    config: BattleConfig,
    make_rng: F,
) -> Option<u32>
where
    R: RandomSource,
    F: Fn() -> R,
{
    let mut a = Battle::new(first.clone(), second.clone(), config);
    let mut b = Battle::new(first.clone(), second.clone(), config);
    let mut rng_a = make_rng();
    let mut rng_b = make_rng();

    while !a.is_resolved() || !b.is_resolved() {
        a.step(&mut rng_a);
        b.step(&mut rng_b);

        if battle_hash(&a) != battle_hash(&b) {
            return Some(a.turn().max(b.turn()));
        }
    }

    None
}

fn battle_hash(battle: &Battle) -> u64 {
    let mut hasher = DefaultHasher::new();
    battle.state().hash(&mut hasher);
    battle.turn().hash(&mut hasher);
    for side in [Side::First, Side::Second] {
        let fighter = battle.fighter(side);
        fighter.hp().hash(&mut hasher);
        fighter.defense().to_bits().hash(&mut hasher);
    }
    battle.log().hash(&mut hasher);
    hasher.finish()
}

/// Compute a simple hash for any hashable value.
pub fn compute_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Hash of a battle result, for comparing runs.
#[must_use]
pub fn battle_result_hash(result: &BattleResult) -> u64 {
    compute_hash(result)
}

/// Hash of a tournament result, for comparing runs.
#[must_use]
pub fn tournament_result_hash(result: &TournamentResult) -> u64 {
    compute_hash(result)
}

/// Proptest strategies for determinism testing.
///
/// These strategies generate random but reproducible fighters and rosters
/// for property-based testing.
pub mod strategies {
    use arena_core::catalog::Roster;
    use arena_core::data::{CombatStats, FighterData};
    use arena_core::rarity::Rarity;
    use proptest::prelude::*;

    /// Generate any rarity tier.
    pub fn arb_rarity() -> impl Strategy<Value = Rarity> {
        prop::sample::select(Rarity::ALL.to_vec())
    }

    /// Generate base stats in a typical range.
    ///
    /// HP: 1-300, other stats: 0-150.
    pub fn arb_stats() -> impl Strategy<Value = CombatStats> {
        (
            1u32..300,
            0u32..150,
            0u32..150,
            0u32..150,
            0u32..150,
            0u32..150,
        )
            .prop_map(|(hp, attack, defense, speed, special, cost)| CombatStats {
                hp,
                attack,
                defense,
                speed,
                special,
                cost,
            })
    }

    /// Generate 0-3 ability names.
    pub fn arb_abilities() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[A-Z][a-z]{2,8}", 0..4)
    }

    /// Generate a fighter definition with the given id.
    pub fn arb_fighter_data(id: String) -> impl Strategy<Value = FighterData> {
        (arb_stats(), arb_abilities(), arb_rarity()).prop_map(move |(stats, abilities, rarity)| {
            FighterData {
                id: id.clone(),
                name: id.to_uppercase(),
                stats,
                abilities,
                rarity,
            }
        })
    }

    /// Generate a roster of `min..max` fighters with ids `f0`, `f1`, ...
    pub fn arb_roster(min: usize, max: usize) -> impl Strategy<Value = Roster> {
        (min..max).prop_flat_map(|len| {
            (0..len)
                .map(|i| arb_fighter_data(format!("f{i}")))
                .collect::<Vec<_>>()
                .prop_map(|fighters| fighters.into_iter().collect::<Roster>())
        })
    }
}
