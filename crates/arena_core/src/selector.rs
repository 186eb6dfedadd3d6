//! Move selection heuristic.
//!
//! Branches are evaluated in strict priority order:
//!
//! 1. Below 30% HP: Cost Drain if cost beats attack, else Defend (terminal).
//! 2. Special-leaning fighter with abilities: 40% chance of Special.
//! 3. Speed above 85: 30% chance of Speed Blitz.
//! 4. Otherwise play to the highest of attack, speed, special and cost.

use crate::fighter::Fighter;
use crate::moves::Move;
use crate::rng::RandomSource;

/// HP percentage below which a fighter switches to survival moves.
pub const LOW_HP_PERCENT: u32 = 30;

/// Chance of opening with Special when special outclasses attack.
pub const SPECIAL_CHANCE_PERCENT: u32 = 40;

/// Speed a fighter must exceed to consider an opportunistic Speed Blitz.
pub const BLITZ_SPEED_THRESHOLD: u32 = 85;

/// Chance of an opportunistic Speed Blitz.
pub const BLITZ_CHANCE_PERCENT: u32 = 30;

/// Choose the move `fighter` uses this turn.
///
/// `opponent` is part of the signature so smarter heuristics can read it;
/// the current rules only look at the acting fighter.
pub fn choose_move<R: RandomSource + ?Sized>(
    fighter: &Fighter,
    _opponent: &Fighter,
    rng: &mut R,
) -> Move {
    if fighter.hp_percentage() < LOW_HP_PERCENT {
        return if fighter.cost() > fighter.attack() {
            Move::CostDrain
        } else {
            Move::Defend
        };
    }

    if fighter.special() > fighter.attack()
        && !fighter.abilities().is_empty()
        && rng.chance(SPECIAL_CHANCE_PERCENT)
    {
        return Move::Special;
    }

    if fighter.speed() > BLITZ_SPEED_THRESHOLD && rng.chance(BLITZ_CHANCE_PERCENT) {
        return Move::SpeedBlitz;
    }

    let best = fighter
        .attack()
        .max(fighter.speed())
        .max(fighter.special())
        .max(fighter.cost());

    if best == fighter.attack() {
        if rng.pick(2) == 0 {
            Move::Analyze
        } else {
            Move::Create
        }
    } else if best == fighter.speed() {
        Move::SpeedBlitz
    } else if best == fighter.special() {
        Move::Special
    } else {
        Move::CostDrain
    }
}
