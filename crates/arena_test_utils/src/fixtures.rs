//! Test fixtures and helpers.
//!
//! Pre-built fighters and rosters for consistent testing.

use arena_core::catalog::Roster;
use arena_core::data::{CombatStats, FighterData};
use arena_core::fighter::Fighter;
use arena_core::math::Fixed;
use arena_core::rarity::Rarity;

/// Create a fixed-point number from an integer.
#[must_use]
pub fn fixed(n: i32) -> Fixed {
    Fixed::from_num(n)
}

/// Builder for fighter definitions with sensible defaults.
///
/// Defaults: 100 HP, 50 in every other stat, common, no abilities.
#[derive(Debug, Clone)]
pub struct FighterBuilder {
    data: FighterData,
    current_hp: Option<u32>,
}

impl FighterBuilder {
    /// Start a builder for `id`. The display name is `id` capitalized.
    #[must_use]
    pub fn new(id: &str) -> Self {
        let mut chars = id.chars();
        let name = match chars.next() {
            Some(c) => c.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };

        Self {
            data: FighterData::new(
                id,
                name,
                CombatStats {
                    hp: 100,
                    attack: 50,
                    defense: 50,
                    speed: 50,
                    special: 50,
                    cost: 50,
                },
                Rarity::Common,
            ),
            current_hp: None,
        }
    }

    /// Set max HP.
    #[must_use]
    pub fn hp(mut self, hp: u32) -> Self {
        self.data.stats.hp = hp;
        self
    }

    /// Set attack.
    #[must_use]
    pub fn attack(mut self, attack: u32) -> Self {
        self.data.stats.attack = attack;
        self
    }

    /// Set defense.
    #[must_use]
    pub fn defense(mut self, defense: u32) -> Self {
        self.data.stats.defense = defense;
        self
    }

    /// Set speed.
    #[must_use]
    pub fn speed(mut self, speed: u32) -> Self {
        self.data.stats.speed = speed;
        self
    }

    /// Set special.
    #[must_use]
    pub fn special(mut self, special: u32) -> Self {
        self.data.stats.special = special;
        self
    }

    /// Set cost.
    #[must_use]
    pub fn cost(mut self, cost: u32) -> Self {
        self.data.stats.cost = cost;
        self
    }

    /// Set rarity.
    #[must_use]
    pub fn rarity(mut self, rarity: Rarity) -> Self {
        self.data.rarity = rarity;
        self
    }

    /// Set abilities.
    #[must_use]
    pub fn abilities(mut self, abilities: &[&str]) -> Self {
        self.data.abilities = abilities.iter().map(|a| (*a).to_string()).collect();
        self
    }

    /// Start the built [`Fighter`] at this HP instead of full health.
    #[must_use]
    pub fn current_hp(mut self, hp: u32) -> Self {
        self.current_hp = Some(hp);
        self
    }

    /// Finish as a catalog definition.
    #[must_use]
    pub fn data(self) -> FighterData {
        self.data
    }

    /// Finish as a battle-ready fighter.
    #[must_use]
    pub fn fighter(self) -> Fighter {
        let fighter = Fighter::from_data(&self.data);
        match self.current_hp {
            Some(hp) => fighter.with_current_hp(hp),
            None => fighter,
        }
    }
}

fn entry(id: &str, stats: [u32; 6], rarity: Rarity, abilities: &[&str]) -> FighterData {
    let [hp, attack, defense, speed, special, cost] = stats;
    FighterBuilder::new(id)
        .hp(hp)
        .attack(attack)
        .defense(defense)
        .speed(speed)
        .special(special)
        .cost(cost)
        .rarity(rarity)
        .abilities(abilities)
        .data()
}

/// Eight fighters covering every rarity and every preferred move.
///
/// Stats are `[hp, attack, defense, speed, special, cost]`.
#[must_use]
pub fn sample_roster() -> Roster {
    [
        entry("bruiser", [140, 90, 40, 35, 20, 30], Rarity::Common, &[]),
        entry("sprinter", [90, 55, 20, 110, 30, 25], Rarity::Uncommon, &[]),
        entry(
            "mystic",
            [100, 40, 30, 60, 95, 40],
            Rarity::Rare,
            &["Arcane Bolt", "Mind Spike"],
        ),
        entry("banker", [110, 35, 35, 45, 30, 100], Rarity::Epic, &[]),
        entry("warden", [160, 45, 90, 25, 25, 20], Rarity::Common, &[]),
        entry(
            "phoenix",
            [120, 80, 45, 90, 100, 60],
            Rarity::Legendary,
            &["Rebirth Flame"],
        ),
        entry("scrapper", [80, 60, 25, 70, 10, 15], Rarity::Common, &[]),
        entry(
            "tactician",
            [100, 70, 50, 55, 75, 45],
            Rarity::Uncommon,
            &["Feint"],
        ),
    ]
    .into_iter()
    .collect()
}

/// Ids of [`sample_roster`], in roster order.
#[must_use]
pub fn sample_ids() -> Vec<String> {
    sample_roster().ids().map(str::to_string).collect()
}
