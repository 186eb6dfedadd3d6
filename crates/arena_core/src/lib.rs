//! # Arena Core
//!
//! Turn-based combat resolver and single-elimination tournament core.
//!
//! This crate contains **only** simulation logic:
//! - No IO (fighter definitions arrive through [`catalog::FighterCatalog`])
//! - No global randomness (every roll goes through [`rng::RandomSource`])
//! - No floating-point damage math (uses fixed-point)
//!
//! This separation enables:
//! - Reproducible battles and brackets from a single seed
//! - Pinned-roll unit tests for the damage formulas
//! - Thin front ends (CLI, reporting) on top of the same core
//!
//! ## Crate Structure
//!
//! - [`fighter`] - Battle-scoped fighter state
//! - [`combat`] - Damage computation and application
//! - [`selector`] - Move selection heuristic
//! - [`battle`] - Turn engine for a single battle
//! - [`tournament`] - Single-elimination bracket orchestration
//! - [`rng`] - Injectable random source
//! - [`math`] - Fixed-point math utilities

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod battle;
pub mod catalog;
pub mod combat;
pub mod data;
pub mod error;
pub mod fighter;
pub mod math;
pub mod moves;
pub mod rarity;
pub mod rng;
pub mod selector;
pub mod tournament;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::battle::{
        run_battle, Battle, BattleConfig, BattleResult, BattleState, Outcome, Side,
    };
    pub use crate::catalog::{FighterCatalog, Roster};
    pub use crate::combat::{compute_damage, DamageRoll};
    pub use crate::data::{CombatStats, FighterData};
    pub use crate::error::{ArenaError, Result};
    pub use crate::fighter::Fighter;
    pub use crate::math::Fixed;
    pub use crate::moves::Move;
    pub use crate::rarity::Rarity;
    pub use crate::rng::{RandomSource, SeededSource};
    pub use crate::selector::choose_move;
    pub use crate::tournament::{run_tournament, Champion, Round, TournamentResult};
}
