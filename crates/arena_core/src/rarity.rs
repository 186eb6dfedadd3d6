//! Rarity tiers and their damage multipliers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tier classification of a fighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    /// Baseline tier.
    #[default]
    Common,
    /// Slightly stronger than common.
    Uncommon,
    /// Mid tier.
    Rare,
    /// High tier.
    Epic,
    /// Top tier.
    Legendary,
}

impl Rarity {
    /// All tiers, lowest first.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Outgoing damage multiplier for this tier, as a whole percentage.
    #[must_use]
    pub const fn damage_multiplier_percent(self) -> u32 {
        match self {
            Rarity::Common => 100,
            Rarity::Uncommon => 110,
            Rarity::Rare => 120,
            Rarity::Epic => 130,
            Rarity::Legendary => 150,
        }
    }

    /// Lowercase name, as used in data files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
