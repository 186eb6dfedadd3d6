//! Fighter definition records.

use serde::{Deserialize, Serialize};

use crate::rarity::Rarity;

/// Base combat statistics for a fighter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct CombatStats {
    /// Maximum health points.
    pub hp: u32,
    /// Drives Analyze, Create, Speed Blitz and the ability-less Special.
    pub attack: u32,
    /// Flat damage reduction (a quarter of it) and the Defend move.
    pub defense: u32,
    /// Turn order, multi-hit count and critical chance.
    pub speed: u32,
    /// Drives Special and part of Create.
    pub special: u32,
    /// Drives Cost Drain.
    #[serde(default)]
    pub cost: u32,
}

/// Data-driven fighter definition.
///
/// # Example RON
///
/// ```ron
/// FighterData(
///     id: "ember",
///     name: "Ember",
///     stats: CombatStats(
///         hp: 120,
///         attack: 70,
///         defense: 40,
///         speed: 90,
///         special: 85,
///         cost: 30,
///     ),
///     abilities: ["Flame Burst"],
///     rarity: rare,
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FighterData {
    /// Stable catalog key.
    pub id: String,

    /// Display name used in battle logs.
    pub name: String,

    /// Base combat statistics.
    pub stats: CombatStats,

    /// Ability names usable by the Special move.
    #[serde(default)]
    pub abilities: Vec<String>,

    /// Rarity tier.
    #[serde(default)]
    pub rarity: Rarity,
}

impl FighterData {
    /// Create a definition with no abilities.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        stats: CombatStats,
        rarity: Rarity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stats,
            abilities: Vec::new(),
            rarity,
        }
    }

    /// Builder method to set abilities.
    #[must_use]
    pub fn with_abilities<I, S>(mut self, abilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abilities = abilities.into_iter().map(Into::into).collect();
        self
    }

    /// Check if this fighter has the named ability.
    #[must_use]
    pub fn has_ability(&self, ability: &str) -> bool {
        self.abilities.iter().any(|a| a == ability)
    }
}
