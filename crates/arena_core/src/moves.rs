//! Move kinds and their damage formula table.
//!
//! Each move maps to one row of coefficients. Base damage is the sum of the
//! attacker's stats weighted by those coefficients; the row's [`MoveEffect`]
//! names the one extra rule the move carries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An action a fighter performs on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Straight attack.
    Analyze,
    /// Attack blended with special.
    Create,
    /// Multi-hit attack scaling with speed.
    SpeedBlitz,
    /// Light counter plus a lasting defense buff.
    Defend,
    /// Ability attack driven by special.
    Special,
    /// Cost-based attack that heals the user.
    CostDrain,
}

/// Extra rule attached to a move's formula row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEffect {
    /// Plain damage.
    None,
    /// Base damage is multiplied by `max(1, speed / 30)` hits.
    MultiHit,
    /// Attacker's current defense is multiplied by 1.5 after the hit.
    Fortify,
    /// One of the attacker's abilities is named; falls back to
    /// [`ABILITYLESS_SPECIAL`] when the attacker has none.
    Ability,
    /// Attacker heals 30% of the base damage.
    Drain,
}

/// Stat coefficients for a move, as whole percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageFormula {
    /// Weight on attack.
    pub attack_percent: u32,
    /// Weight on special.
    pub special_percent: u32,
    /// Weight on current defense.
    pub defense_percent: u32,
    /// Weight on cost.
    pub cost_percent: u32,
    /// Additional rule.
    pub effect: MoveEffect,
}

impl DamageFormula {
    const fn new(effect: MoveEffect) -> Self {
        Self {
            attack_percent: 0,
            special_percent: 0,
            defense_percent: 0,
            cost_percent: 0,
            effect,
        }
    }
}

/// Formula used by [`Move::Special`] when the attacker knows no abilities.
pub const ABILITYLESS_SPECIAL: DamageFormula = DamageFormula {
    attack_percent: 80,
    ..DamageFormula::new(MoveEffect::None)
};

impl Move {
    /// All moves, in declaration order.
    pub const ALL: [Move; 6] = [
        Move::Analyze,
        Move::Create,
        Move::SpeedBlitz,
        Move::Defend,
        Move::Special,
        Move::CostDrain,
    ];

    /// Formula row for this move.
    #[must_use]
    pub const fn formula(self) -> DamageFormula {
        match self {
            Move::Analyze => DamageFormula {
                attack_percent: 100,
                ..DamageFormula::new(MoveEffect::None)
            },
            Move::Create => DamageFormula {
                attack_percent: 80,
                special_percent: 20,
                ..DamageFormula::new(MoveEffect::None)
            },
            Move::SpeedBlitz => DamageFormula {
                attack_percent: 50,
                ..DamageFormula::new(MoveEffect::MultiHit)
            },
            Move::Defend => DamageFormula {
                defense_percent: 30,
                ..DamageFormula::new(MoveEffect::Fortify)
            },
            Move::Special => DamageFormula {
                special_percent: 120,
                ..DamageFormula::new(MoveEffect::Ability)
            },
            Move::CostDrain => DamageFormula {
                cost_percent: 70,
                ..DamageFormula::new(MoveEffect::Drain)
            },
        }
    }

    /// Display name used in battle logs.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Move::Analyze => "Analyze",
            Move::Create => "Create",
            Move::SpeedBlitz => "Speed Blitz",
            Move::Defend => "Defend",
            Move::Special => "Special",
            Move::CostDrain => "Cost Drain",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
