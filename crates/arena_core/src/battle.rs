//! Turn engine for a single battle.
//!
//! A [`Battle`] moves through `NotStarted → InProgress → Resolved`. Each
//! [`Battle::step`] plays one full turn: the faster fighter acts first (ties
//! go to the first-listed fighter), and a fighter that is already down when
//! its action comes up does nothing. The battle resolves as soon as either
//! fighter falls, or as a draw once `max_turns` turns have been played.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::catalog::FighterCatalog;
use crate::combat::{perform_move, ActionReport};
use crate::error::{ArenaError, Result};
use crate::fighter::Fighter;
use crate::rng::RandomSource;
use crate::selector::choose_move;

/// Default turn cap for a battle.
pub const DEFAULT_MAX_TURNS: u32 = 50;

/// Winner name reported for a draw.
pub const DRAW_NAME: &str = "Draw";

/// Tunable battle settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Turns played before an undecided battle is called a draw.
    pub max_turns: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl BattleConfig {
    /// Builder method to set the turn cap.
    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

/// Which of the two fighters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// First-listed fighter.
    First,
    /// Second-listed fighter.
    Second,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Terminal outcome of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One fighter is the sole survivor.
    Win(Side),
    /// Both fell, or both survived the turn cap.
    Draw,
}

/// Battle lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleState {
    /// No turn has been played yet.
    NotStarted,
    /// Turns are being played.
    InProgress,
    /// Finished with an outcome.
    Resolved(Outcome),
}

/// Summary of a finished battle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BattleResult {
    /// Id of the winner (None for a draw).
    pub winner_id: Option<String>,
    /// Name of the winner, or `"Draw"`.
    pub winner_name: String,
    /// Turns played.
    pub turns: u32,
    /// First fighter's HP at the end.
    pub fighter1_final_hp: u32,
    /// Second fighter's HP at the end.
    pub fighter2_final_hp: u32,
    /// Human-readable battle narrative, in order.
    pub log: Vec<String>,
}

impl BattleResult {
    /// Whether the battle ended without a winner.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner_id.is_none()
    }
}

/// A battle between two fighters.
#[derive(Debug, Clone)]
pub struct Battle {
    fighters: [Fighter; 2],
    state: BattleState,
    turn: u32,
    max_turns: u32,
    log: Vec<String>,
}

impl Battle {
    /// Set up a battle. Both fighters should be freshly built for it.
    #[must_use]
    pub fn new(first: Fighter, second: Fighter, config: BattleConfig) -> Self {
        let log = vec![format!(
            "Battle: {} ({}) vs {} ({})",
            first.name(),
            first.rarity(),
            second.name(),
            second.rarity()
        )];

        Self {
            fighters: [first, second],
            state: BattleState::NotStarted,
            turn: 0,
            max_turns: config.max_turns,
            log,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> BattleState {
        self.state
    }

    /// Turns played so far.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Access one of the fighters.
    #[must_use]
    pub fn fighter(&self, side: Side) -> &Fighter {
        &self.fighters[side.index()]
    }

    /// Narrative so far.
    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Whether the battle has reached an outcome.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self.state, BattleState::Resolved(_))
    }

    /// Side that acts first: the faster fighter, ties to the first-listed.
    #[must_use]
    pub fn initiative(&self) -> Side {
        if self.fighters[0].speed() >= self.fighters[1].speed() {
            Side::First
        } else {
            Side::Second
        }
    }

    /// Play one turn and return the new state.
    ///
    /// Does nothing once the battle is resolved.
    pub fn step<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> BattleState {
        match self.state {
            BattleState::Resolved(_) => return self.state,
            BattleState::NotStarted => {
                self.state = BattleState::InProgress;
                if let Some(outcome) = self.survivor_outcome() {
                    self.resolve(outcome);
                    return self.state;
                }
            }
            BattleState::InProgress => {}
        }

        if self.turn >= self.max_turns {
            self.resolve(Outcome::Draw);
            return self.state;
        }

        self.turn += 1;
        let first = self.initiative();
        for side in [first, first.opponent()] {
            if self.fighter(side).is_alive() {
                self.act(side, rng);
            }
        }

        if let Some(outcome) = self.survivor_outcome() {
            self.resolve(outcome);
        } else if self.turn >= self.max_turns {
            self.resolve(Outcome::Draw);
        }

        self.state
    }

    /// Play turns until the battle resolves.
    pub fn run<R: RandomSource + ?Sized>(mut self, rng: &mut R) -> BattleResult {
        while !self.is_resolved() {
            self.step(rng);
        }
        self.into_result()
    }

    /// Summarize the battle. An unresolved battle reports as a draw.
    #[must_use]
    pub fn into_result(self) -> BattleResult {
        let winner = match self.state {
            BattleState::Resolved(Outcome::Win(side)) => Some(side),
            _ => None,
        };
        let [first, second] = self.fighters;
        let (winner_id, winner_name) = match winner {
            Some(Side::First) => (Some(first.id().to_string()), first.name().to_string()),
            Some(Side::Second) => (Some(second.id().to_string()), second.name().to_string()),
            None => (None, DRAW_NAME.to_string()),
        };

        BattleResult {
            winner_id,
            winner_name,
            turns: self.turn,
            fighter1_final_hp: first.hp(),
            fighter2_final_hp: second.hp(),
            log: self.log,
        }
    }

    fn act<R: RandomSource + ?Sized>(&mut self, side: Side, rng: &mut R) {
        let [first, second] = &mut self.fighters;
        let (actor, target) = match side {
            Side::First => (first, second),
            Side::Second => (second, first),
        };

        let action = choose_move(actor, target, rng);
        let report = perform_move(actor, action, target, rng);

        tracing::debug!(
            turn = self.turn,
            attacker = actor.id(),
            action = %action,
            damage = report.roll.damage,
            dealt = report.dealt,
            critical = report.roll.critical,
            "Fighter acted"
        );

        let line = describe_action(self.turn, actor, target, &report);
        self.log.push(line);
    }

    fn survivor_outcome(&self) -> Option<Outcome> {
        match (self.fighters[0].is_alive(), self.fighters[1].is_alive()) {
            (true, true) => None,
            (true, false) => Some(Outcome::Win(Side::First)),
            (false, true) => Some(Outcome::Win(Side::Second)),
            (false, false) => Some(Outcome::Draw),
        }
    }

    fn resolve(&mut self, outcome: Outcome) {
        self.state = BattleState::Resolved(outcome);

        let line = match outcome {
            Outcome::Win(side) => format!(
                "{} wins after {} turns!",
                self.fighter(side).name(),
                self.turn
            ),
            Outcome::Draw => format!("Draw after {} turns.", self.turn),
        };
        self.log.push(line);

        tracing::info!(
            first = self.fighters[0].id(),
            second = self.fighters[1].id(),
            turns = self.turn,
            outcome = ?outcome,
            "Battle resolved"
        );
    }
}

fn describe_action(turn: u32, actor: &Fighter, target: &Fighter, report: &ActionReport) -> String {
    let roll = &report.roll;
    let mut line = format!("Turn {turn}: {} uses {}", actor.name(), roll.action);

    // Writing to a String cannot fail.
    if let Some(ability) = &roll.ability {
        let _ = write!(line, " ({ability})");
    }
    let _ = write!(line, " on {} for {} damage", target.name(), report.dealt);
    if roll.critical {
        line.push_str(" - critical hit!");
    }
    if roll.healed > 0 {
        let _ = write!(line, ", recovering {} HP", roll.healed);
    }
    if let Some(defense) = roll.fortified_defense {
        let _ = write!(line, ", defense rises to {}", defense.to_num::<u32>());
    }
    let _ = write!(
        line,
        " [{}: {}/{} HP, {}: {}/{} HP]",
        actor.name(),
        actor.hp(),
        actor.max_hp(),
        target.name(),
        target.hp(),
        target.max_hp()
    );
    line
}

/// Run a battle between two catalog fighters.
///
/// Both fighters are built fresh from their definitions, so nothing a battle
/// does (HP loss, Defend buffs) carries into the next one.
///
/// # Errors
///
/// Returns [`ArenaError::UnknownFighter`] if either id is missing from the
/// catalog. No turn is played in that case.
pub fn run_battle<C, R>(
    catalog: &C,
    first_id: &str,
    second_id: &str,
    config: BattleConfig,
    rng: &mut R,
) -> Result<BattleResult>
where
    C: FighterCatalog + ?Sized,
    R: RandomSource + ?Sized,
{
    let first = catalog
        .fighter(first_id)
        .ok_or_else(|| ArenaError::UnknownFighter(first_id.to_string()))?;
    let second = catalog
        .fighter(second_id)
        .ok_or_else(|| ArenaError::UnknownFighter(second_id.to_string()))?;

    let battle = Battle::new(Fighter::from_data(first), Fighter::from_data(second), config);
    Ok(battle.run(rng))
}
