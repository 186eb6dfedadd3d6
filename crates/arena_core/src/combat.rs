//! Damage computation for fighter moves.
//!
//! Formula:
//! ```text
//! Base Damage  = Σ(stat × move coefficient)            (see Move::formula)
//! Speed Blitz  : Base × max(1, speed / 30)
//! Raw Damage   = trunc(Base × Rarity Multiplier × Jitter[0.85, 1.15])
//! Critical     : d100 ≤ speed / 10  →  trunc(Raw × 1.5)
//! Dealt        = max(0, Raw − defender.defense / 4)    (Fighter::take_damage)
//! ```
//!
//! Base damage is accumulated in hundredths so the only division happens
//! once, after every multiplier is applied. The whole chain runs in
//! [`Wide`] and is clamped to `u32` only at the end.

use crate::fighter::Fighter;
use crate::math::{from_percent, truncate_wide_to_u32, Fixed, Wide};
use crate::moves::{DamageFormula, Move, MoveEffect, ABILITYLESS_SPECIAL};
use crate::rng::RandomSource;

/// Speed points per Speed Blitz hit.
pub const MULTI_HIT_SPEED_DIVISOR: u32 = 30;

/// Speed points per percent of critical chance.
pub const CRIT_SPEED_DIVISOR: u32 = 10;

/// Critical hits deal this percentage of the rolled damage.
pub const CRIT_MULTIPLIER_PERCENT: u32 = 150;

/// Defend multiplies current defense by this percentage.
pub const FORTIFY_PERCENT: u32 = 150;

/// Cost Drain heals this percentage of its base damage.
pub const DRAIN_HEAL_PERCENT: u32 = 30;

/// Outcome of computing one move's damage.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageRoll {
    /// Move that was used.
    pub action: Move,
    /// Base damage before rarity, jitter and critical, truncated.
    pub base_damage: u32,
    /// Final raw damage to hand to [`Fighter::take_damage`].
    pub damage: u32,
    /// Whether the critical roll succeeded.
    pub critical: bool,
    /// Ability named by a Special move.
    pub ability: Option<String>,
    /// HP restored to the attacker by Cost Drain.
    pub healed: u32,
    /// Attacker's defense after a Defend buff.
    pub fortified_defense: Option<Fixed>,
}

/// Result of performing a move against a defender.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionReport {
    /// Damage computation details.
    pub roll: DamageRoll,
    /// HP actually removed from the defender.
    pub dealt: u32,
}

/// Base damage in hundredths of a point.
fn base_hundredths(attacker: &Fighter, formula: &DamageFormula) -> Wide {
    let flat = u64::from(attacker.attack()) * u64::from(formula.attack_percent)
        + u64::from(attacker.special()) * u64::from(formula.special_percent)
        + u64::from(attacker.cost()) * u64::from(formula.cost_percent);

    let mut base = Wide::saturating_from_num(flat).saturating_add(
        Wide::from_num(attacker.defense())
            .saturating_mul(Wide::from_num(formula.defense_percent)),
    );

    if formula.effect == MoveEffect::MultiHit {
        let hits = (attacker.speed() / MULTI_HIT_SPEED_DIVISOR).max(1);
        base = base.saturating_mul(Wide::from_num(hits));
    }

    base
}

/// Compute the damage `attacker` deals with `action`.
///
/// Applies the move's self effect to the attacker (Defend buff, Cost Drain
/// heal) but does not touch the defender; see [`perform_move`].
///
/// Random draws happen in a fixed order: ability choice (Special only),
/// jitter, then the critical roll.
pub fn compute_damage<R: RandomSource + ?Sized>(
    attacker: &mut Fighter,
    action: Move,
    _defender: &Fighter,
    rng: &mut R,
) -> DamageRoll {
    let mut formula = action.formula();
    let mut ability = None;

    if formula.effect == MoveEffect::Ability {
        let abilities = attacker.abilities();
        if abilities.is_empty() {
            formula = ABILITYLESS_SPECIAL;
        } else {
            ability = Some(abilities[rng.pick(abilities.len())].clone());
        }
    }

    let hundredths = base_hundredths(attacker, &formula);
    let hundred = Wide::from_num(100);

    let mut healed = 0;
    let mut fortified_defense = None;
    match formula.effect {
        MoveEffect::Fortify => {
            fortified_defense = Some(attacker.amplify_defense(from_percent(FORTIFY_PERCENT)));
        }
        MoveEffect::Drain => {
            let heal = hundredths.saturating_mul(Wide::from_num(DRAIN_HEAL_PERCENT))
                / (hundred * hundred);
            healed = attacker.heal(truncate_wide_to_u32(heal));
        }
        MoveEffect::None | MoveEffect::MultiHit | MoveEffect::Ability => {}
    }

    let rarity = Wide::from_num(attacker.rarity().damage_multiplier_percent());
    let scaled = hundredths
        .saturating_mul(rarity)
        .saturating_mul(Wide::from_num(rng.jitter()))
        / (hundred * hundred);
    let mut damage = truncate_wide_to_u32(scaled);

    let critical = rng.roll_d100() <= attacker.speed() / CRIT_SPEED_DIVISOR;
    if critical {
        let boosted = u64::from(damage) * u64::from(CRIT_MULTIPLIER_PERCENT) / 100;
        damage = u32::try_from(boosted).unwrap_or(u32::MAX);
    }

    DamageRoll {
        action,
        base_damage: truncate_wide_to_u32(hundredths / hundred),
        damage,
        critical,
        ability,
        healed,
        fortified_defense,
    }
}

/// Compute `action`'s damage and apply it to `defender`.
pub fn perform_move<R: RandomSource + ?Sized>(
    attacker: &mut Fighter,
    action: Move,
    defender: &mut Fighter,
    rng: &mut R,
) -> ActionReport {
    let roll = compute_damage(attacker, action, defender, rng);
    let dealt = defender.take_damage(roll.damage);
    ActionReport { roll, dealt }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CombatStats;
    use crate::rarity::Rarity;
    use crate::rng::PinnedSource;

    fn fighter(attack: u32, defense: u32, speed: u32, special: u32, cost: u32) -> Fighter {
        Fighter::new(
            "attacker",
            "Attacker",
            CombatStats {
                hp: 100,
                attack,
                defense,
                speed,
                special,
                cost,
            },
            Rarity::Common,
        )
    }

    fn target(defense: u32) -> Fighter {
        fighter(10, defense, 10, 10, 10)
    }

    #[test]
    fn test_analyze_vs_defense_forty() {
        let mut attacker = fighter(100, 0, 20, 0, 0);
        let mut defender = target(40);
        let mut rng = PinnedSource::neutral();

        let report = perform_move(&mut attacker, Move::Analyze, &mut defender, &mut rng);
        assert_eq!(report.roll.damage, 100);
        assert_eq!(report.dealt, 90);
        assert!(!report.roll.critical);
    }

    #[test]
    fn test_create_blends_attack_and_special() {
        let mut attacker = fighter(100, 0, 0, 50, 0);
        let roll = compute_damage(&mut attacker, Move::Create, &target(0), &mut PinnedSource::neutral());
        // 100 * 0.8 + 50 * 0.2
        assert_eq!(roll.damage, 90);
    }

    #[test]
    fn test_speed_blitz_hits_scale_with_speed() {
        let mut fast = fighter(100, 0, 95, 0, 0);
        let roll = compute_damage(&mut fast, Move::SpeedBlitz, &target(0), &mut PinnedSource::neutral());
        // 3 hits of 50
        assert_eq!(roll.damage, 150);

        let mut slow = fighter(100, 0, 20, 0, 0);
        let roll = compute_damage(&mut slow, Move::SpeedBlitz, &target(0), &mut PinnedSource::neutral());
        // at least one hit
        assert_eq!(roll.damage, 50);
    }

    #[test]
    fn test_defend_uses_pre_buff_defense_then_stacks() {
        let mut attacker = fighter(10, 40, 0, 0, 0);
        let mut rng = PinnedSource::neutral();

        let first = compute_damage(&mut attacker, Move::Defend, &target(0), &mut rng);
        assert_eq!(first.damage, 12);
        assert_eq!(first.fortified_defense, Some(Fixed::from_num(60)));

        let second = compute_damage(&mut attacker, Move::Defend, &target(0), &mut rng);
        assert_eq!(second.damage, 18);
        assert_eq!(attacker.defense(), Fixed::from_num(90));
        assert_eq!(attacker.base_stats().defense, 40);
    }

    #[test]
    fn test_special_names_an_ability() {
        let mut attacker =
            fighter(10, 0, 0, 90, 0).with_abilities(["Spark", "Overload", "Static Field"]);
        let mut rng = PinnedSource {
            pick: 1,
            ..PinnedSource::neutral()
        };

        let roll = compute_damage(&mut attacker, Move::Special, &target(0), &mut rng);
        assert_eq!(roll.damage, 108);
        assert_eq!(roll.ability.as_deref(), Some("Overload"));
    }

    #[test]
    fn test_special_without_abilities_falls_back() {
        let mut attacker = fighter(100, 0, 0, 500, 0);
        let roll = compute_damage(&mut attacker, Move::Special, &target(0), &mut PinnedSource::neutral());
        assert_eq!(roll.damage, 80);
        assert_eq!(roll.ability, None);
    }

    #[test]
    fn test_cost_drain_heals_attacker() {
        let mut attacker = fighter(10, 0, 0, 0, 80).with_current_hp(50);
        let roll = compute_damage(&mut attacker, Move::CostDrain, &target(0), &mut PinnedSource::neutral());

        assert_eq!(roll.base_damage, 56);
        assert_eq!(roll.damage, 56);
        // floor(56 * 0.3)
        assert_eq!(roll.healed, 16);
        assert_eq!(attacker.hp(), 66);
    }

    #[test]
    fn test_cost_drain_heal_is_clamped() {
        let mut attacker = fighter(10, 0, 0, 0, 80).with_current_hp(95);
        let roll = compute_damage(&mut attacker, Move::CostDrain, &target(0), &mut PinnedSource::neutral());
        assert_eq!(roll.healed, 5);
        assert_eq!(attacker.hp(), 100);
    }

    #[test]
    fn test_rarity_multiplier_uses_attacker_tier() {
        let expected = [100, 110, 120, 130, 150];
        for (rarity, want) in Rarity::ALL.into_iter().zip(expected) {
            let mut attacker = Fighter::new(
                "a",
                "A",
                CombatStats {
                    hp: 100,
                    attack: 100,
                    ..CombatStats::default()
                },
                rarity,
            );
            let roll = compute_damage(&mut attacker, Move::Analyze, &target(0), &mut PinnedSource::neutral());
            assert_eq!(roll.damage, want, "{rarity}");
        }
    }

    #[test]
    fn test_jitter_scales_damage() {
        let mut attacker = fighter(100, 0, 0, 0, 0);
        let mut rng = PinnedSource {
            jitter: Fixed::from_num(0.75),
            ..PinnedSource::neutral()
        };
        let roll = compute_damage(&mut attacker, Move::Analyze, &target(0), &mut rng);
        assert_eq!(roll.damage, 75);
    }

    #[test]
    fn test_critical_threshold_follows_speed() {
        let mut attacker = fighter(101, 0, 100, 0, 0);

        let mut at_threshold = PinnedSource {
            d100: 10,
            ..PinnedSource::neutral()
        };
        let roll = compute_damage(&mut attacker, Move::Analyze, &target(0), &mut at_threshold);
        assert!(roll.critical);
        // trunc(101 * 1.5)
        assert_eq!(roll.damage, 151);

        let mut above = PinnedSource {
            d100: 11,
            ..PinnedSource::neutral()
        };
        let roll = compute_damage(&mut attacker, Move::Analyze, &target(0), &mut above);
        assert!(!roll.critical);
        assert_eq!(roll.damage, 101);
    }

    #[test]
    fn test_slow_fighters_never_crit() {
        let mut attacker = fighter(100, 0, 9, 0, 0);
        let mut rng = PinnedSource {
            d100: 1,
            ..PinnedSource::neutral()
        };
        let roll = compute_damage(&mut attacker, Move::Analyze, &target(0), &mut rng);
        assert!(!roll.critical);
    }

    #[test]
    fn test_large_stats_do_not_saturate() {
        let mut common = fighter(1_000_000, 0, 0, 0, 0);
        let roll = compute_damage(&mut common, Move::Analyze, &target(0), &mut PinnedSource::neutral());
        assert_eq!(roll.damage, 1_000_000);
        assert_eq!(roll.base_damage, 1_000_000);

        let mut legendary = Fighter::new(
            "a",
            "A",
            CombatStats {
                hp: 100,
                attack: 200_000,
                ..CombatStats::default()
            },
            Rarity::Legendary,
        );
        let roll = compute_damage(&mut legendary, Move::Analyze, &target(0), &mut PinnedSource::neutral());
        assert_eq!(roll.damage, 300_000);

        let mut wall = fighter(0, 1_000_000, 0, 0, 0);
        let roll = compute_damage(&mut wall, Move::Defend, &target(0), &mut PinnedSource::neutral());
        assert_eq!(roll.damage, 300_000);
    }

    #[test]
    fn test_extreme_damage_clamps_to_u32() {
        let mut attacker = fighter(u32::MAX, 0, u32::MAX, 0, 0);
        let roll = compute_damage(&mut attacker, Move::SpeedBlitz, &target(0), &mut PinnedSource::neutral());
        assert_eq!(roll.damage, u32::MAX);
    }

    #[test]
    fn test_zero_stats_deal_zero() {
        let mut attacker = fighter(0, 0, 0, 0, 0);
        for mv in Move::ALL {
            let roll = compute_damage(&mut attacker, mv, &target(0), &mut PinnedSource::neutral());
            assert_eq!(roll.damage, 0, "{mv}");
        }
    }
}
