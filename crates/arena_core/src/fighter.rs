//! Battle-scoped fighter state.
//!
//! A [`Fighter`] is built fresh from a [`FighterData`] record for every
//! battle. Base stats are fixed at construction; only current HP and
//! current defense change while the battle runs, and neither is ever
//! written back to the source definition.

use crate::data::{CombatStats, FighterData};
use crate::math::{truncate_to_u32, Fixed};
use crate::rarity::Rarity;

/// Incoming raw damage is reduced by `defense / DEFENSE_DIVISOR`.
pub const DEFENSE_DIVISOR: u32 = 4;

/// A combat participant with mutable runtime state.
#[derive(Debug, Clone, PartialEq)]
pub struct Fighter {
    id: String,
    name: String,
    stats: CombatStats,
    abilities: Vec<String>,
    rarity: Rarity,
    hp: u32,
    defense: Fixed,
}

impl Fighter {
    /// Create a fighter at full health.
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
            hp: stats.hp,
            defense: Fixed::saturating_from_num(stats.defense),
        }
    }

    /// Build a fresh fighter from a catalog definition.
    #[must_use]
    pub fn from_data(data: &FighterData) -> Self {
        Self::new(data.id.clone(), data.name.clone(), data.stats, data.rarity)
            .with_abilities(data.abilities.iter().cloned())
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

    /// Builder method to start the fighter below full health (clamped to max HP).
    #[must_use]
    pub fn with_current_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.stats.hp);
        self
    }

    /// Stable catalog key.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base stats as defined in the catalog.
    #[must_use]
    pub const fn base_stats(&self) -> &CombatStats {
        &self.stats
    }

    /// Maximum health points.
    #[must_use]
    pub const fn max_hp(&self) -> u32 {
        self.stats.hp
    }

    /// Current health points.
    #[must_use]
    pub const fn hp(&self) -> u32 {
        self.hp
    }

    /// Base attack.
    #[must_use]
    pub const fn attack(&self) -> u32 {
        self.stats.attack
    }

    /// Current defense, including any Defend buffs taken this battle.
    #[must_use]
    pub const fn defense(&self) -> Fixed {
        self.defense
    }

    /// Base speed.
    #[must_use]
    pub const fn speed(&self) -> u32 {
        self.stats.speed
    }

    /// Base special.
    #[must_use]
    pub const fn special(&self) -> u32 {
        self.stats.special
    }

    /// Base cost.
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.stats.cost
    }

    /// Known abilities.
    #[must_use]
    pub fn abilities(&self) -> &[String] {
        &self.abilities
    }

    /// Rarity tier.
    #[must_use]
    pub const fn rarity(&self) -> Rarity {
        self.rarity
    }

    /// Whether the fighter still has HP left.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Current HP as a whole percentage of max HP, rounded down.
    ///
    /// A fighter with zero max HP reports 0.
    #[must_use]
    pub fn hp_percentage(&self) -> u32 {
        if self.stats.hp == 0 {
            return 0;
        }
        let percent = u64::from(self.hp) * 100 / u64::from(self.stats.hp);
        u32::try_from(percent).unwrap_or(100)
    }

    /// Flat reduction applied to incoming raw damage.
    #[must_use]
    pub fn damage_reduction(&self) -> u32 {
        truncate_to_u32(self.defense / Fixed::from_num(DEFENSE_DIVISOR))
    }

    /// Apply raw damage after defense reduction.
    ///
    /// Returns the HP actually removed, which may be 0.
    pub fn take_damage(&mut self, raw_damage: u32) -> u32 {
        let reduced = raw_damage.saturating_sub(self.damage_reduction());
        let actual = reduced.min(self.hp);
        self.hp -= actual;
        actual
    }

    /// Restore HP, never exceeding max HP.
    ///
    /// Returns the HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.stats.hp - self.hp);
        self.hp += actual;
        actual
    }

    /// Multiply current defense by `factor`, saturating at the numeric bound.
    pub(crate) fn amplify_defense(&mut self, factor: Fixed) -> Fixed {
        self.defense = self.defense.saturating_mul(factor);
        self.defense
    }
}
