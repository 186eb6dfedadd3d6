//! Single-elimination tournament orchestration.
//!
//! The bracket is built from the input order and never reseeded: each round
//! pairs entrants `(0, 1)`, `(2, 3)`, ... and an odd trailing entrant gets a
//! bye. Draws are broken by a coin flip from the random source. Battles run
//! one after another, in bracket order.

use serde::{Deserialize, Serialize};

use crate::battle::{run_battle, BattleConfig, BattleResult};
use crate::catalog::FighterCatalog;
use crate::error::{ArenaError, Result};
use crate::rng::RandomSource;

/// One round of the bracket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number.
    pub round_number: u32,
    /// Battles in bracket order.
    pub battles: Vec<BattleResult>,
    /// Entrant that advanced without fighting, if the round was odd-sized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bye: Option<String>,
}

/// The tournament winner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Champion {
    /// Fighter id.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Full record of a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TournamentResult {
    /// Entrant ids in bracket order.
    pub participants: Vec<String>,
    /// Rounds in the order they were played.
    pub rounds: Vec<Round>,
    /// Last fighter standing.
    pub champion: Option<Champion>,
}

impl TournamentResult {
    /// Total battles fought across all rounds.
    #[must_use]
    pub fn battle_count(&self) -> usize {
        self.rounds.iter().map(|r| r.battles.len()).sum()
    }
}

/// Run a single-elimination tournament over `ids`.
///
/// Every id is checked against the catalog before the first battle, so an
/// invalid bracket never runs partway.
///
/// # Errors
///
/// - [`ArenaError::InsufficientParticipants`] with fewer than two ids.
/// - [`ArenaError::UnknownFighter`] if any id is missing from the catalog.
pub fn run_tournament<C, R, S>(
    catalog: &C,
    ids: &[S],
    config: BattleConfig,
    rng: &mut R,
) -> Result<TournamentResult>
where
    C: FighterCatalog + ?Sized,
    R: RandomSource + ?Sized,
    S: AsRef<str>,
{
    if ids.len() < 2 {
        return Err(ArenaError::InsufficientParticipants { count: ids.len() });
    }

    let participants: Vec<String> = ids.iter().map(|id| id.as_ref().to_string()).collect();
    if let Some(missing) = participants.iter().find(|id| !catalog.contains(id)) {
        return Err(ArenaError::UnknownFighter(missing.clone()));
    }

    tracing::info!(entrants = participants.len(), "Tournament started");

    let mut rounds = Vec::new();
    let mut current = participants.clone();
    let mut round_number = 1;

    while current.len() > 1 {
        let mut advancing = Vec::with_capacity(current.len().div_ceil(2));
        let mut battles = Vec::with_capacity(current.len() / 2);
        let mut bye = None;

        let mut entrants = std::mem::take(&mut current).into_iter();
        while let Some(first) = entrants.next() {
            let Some(second) = entrants.next() else {
                tracing::debug!(round = round_number, entrant = %first, "Bye");
                bye = Some(first.clone());
                advancing.push(first);
                break;
            };

            let result = run_battle(catalog, &first, &second, config, rng)?;
            let winner = match &result.winner_id {
                Some(id) => id.clone(),
                None => {
                    let pick = if rng.pick(2) == 0 { first } else { second };
                    tracing::debug!(
                        round = round_number,
                        advancing = %pick,
                        "Draw broken by coin flip"
                    );
                    pick
                }
            };
            advancing.push(winner);
            battles.push(result);
        }

        tracing::info!(
            round = round_number,
            battles = battles.len(),
            advancing = advancing.len(),
            "Round complete"
        );

        rounds.push(Round {
            round_number,
            battles,
            bye,
        });
        current = advancing;
        round_number += 1;
    }

    let champion = current.first().and_then(|id| {
        catalog.fighter(id).map(|data| Champion {
            id: id.clone(),
            name: data.name.clone(),
        })
    });

    if let Some(champion) = &champion {
        tracing::info!(champion = %champion.id, rounds = rounds.len(), "Tournament resolved");
    }

    Ok(TournamentResult {
        participants,
        rounds,
        champion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Roster;
    use crate::data::{CombatStats, FighterData};
    use crate::rarity::Rarity;
    use crate::rng::{PinnedSource, SeededSource};

    fn entrant(id: &str, attack: u32, speed: u32) -> FighterData {
        FighterData::new(
            id,
            id.to_uppercase(),
            CombatStats {
                hp: 100,
                attack,
                defense: 0,
                speed,
                special: 0,
                cost: 0,
            },
            Rarity::Common,
        )
    }

    fn roster(entries: &[FighterData]) -> Roster {
        entries.iter().cloned().collect()
    }

    #[test]
    fn test_single_entrant_is_rejected() {
        let roster = roster(&[entrant("a", 10, 10)]);
        let err = run_tournament(&roster, &["a"], BattleConfig::default(), &mut PinnedSource::neutral())
            .expect_err("one entrant is not a bracket");
        assert_eq!(err, ArenaError::InsufficientParticipants { count: 1 });
    }

    #[test]
    fn test_empty_is_rejected() {
        let roster = Roster::new();
        let ids: [&str; 0] = [];
        let err = run_tournament(&roster, &ids, BattleConfig::default(), &mut PinnedSource::neutral())
            .expect_err("no entrants");
        assert_eq!(err, ArenaError::InsufficientParticipants { count: 0 });
    }

    #[test]
    fn test_unknown_entrant_aborts_before_any_battle() {
        let roster = roster(&[entrant("a", 10, 10), entrant("b", 10, 10)]);
        let err = run_tournament(
            &roster,
            &["a", "b", "ghost"],
            BattleConfig::default(),
            &mut SeededSource::from_seed(5),
        )
        .expect_err("ghost is unknown");
        assert_eq!(err, ArenaError::UnknownFighter("ghost".to_string()));
    }

    #[test]
    fn test_three_entrants_bye_and_final() {
        // "c" has overwhelming attack and speed, "a" beats "b".
        let roster = roster(&[
            entrant("a", 100, 20),
            entrant("b", 10, 10),
            entrant("c", 500, 30),
        ]);
        let result = run_tournament(
            &roster,
            &["a", "b", "c"],
            BattleConfig::default(),
            &mut PinnedSource::neutral(),
        )
        .expect("valid bracket");

        assert_eq!(result.participants, vec!["a", "b", "c"]);
        assert_eq!(result.rounds.len(), 2);

        let first = &result.rounds[0];
        assert_eq!(first.round_number, 1);
        assert_eq!(first.battles.len(), 1);
        assert_eq!(first.battles[0].winner_id.as_deref(), Some("a"));
        assert_eq!(first.bye.as_deref(), Some("c"));

        let second = &result.rounds[1];
        assert_eq!(second.round_number, 2);
        assert_eq!(second.battles.len(), 1);
        assert_eq!(second.bye, None);
        assert!(second.battles[0].log[0].contains("A (common) vs C (common)"));

        assert_eq!(
            result.champion,
            Some(Champion {
                id: "c".to_string(),
                name: "C".to_string(),
            })
        );
    }

    #[test]
    fn test_draw_is_broken_by_random_source() {
        // Nobody can hurt anybody: every battle is a draw at the turn cap.
        let walls: Vec<FighterData> = ["a", "b"]
            .iter()
            .map(|id| FighterData {
                stats: CombatStats {
                    hp: 100,
                    attack: 1,
                    defense: 100,
                    speed: 1,
                    special: 0,
                    cost: 0,
                },
                ..entrant(id, 1, 1)
            })
            .collect();
        let roster = roster(&walls);
        let config = BattleConfig::default().with_max_turns(3);

        let mut heads = PinnedSource::neutral();
        let result = run_tournament(&roster, &["a", "b"], config, &mut heads).expect("valid");
        assert!(result.rounds[0].battles[0].is_draw());
        assert_eq!(result.champion.map(|c| c.id), Some("a".to_string()));

        let mut tails = PinnedSource {
            pick: 1,
            ..PinnedSource::neutral()
        };
        let result = run_tournament(&roster, &["a", "b"], config, &mut tails).expect("valid");
        assert_eq!(result.champion.map(|c| c.id), Some("b".to_string()));
    }

    #[test]
    fn test_odd_bracket_keeps_every_entrant() {
        let entries: Vec<FighterData> = (0..5)
            .map(|i| entrant(&format!("f{i}"), 20 + i * 10, 10 + i))
            .collect();
        let roster = roster(&entries);
        let ids: Vec<String> = roster.ids().map(str::to_string).collect();

        let result = run_tournament(&roster, &ids, BattleConfig::default(), &mut PinnedSource::neutral())
            .expect("valid");

        // 5 -> 3 -> 2 -> 1
        let battles: Vec<usize> = result.rounds.iter().map(|r| r.battles.len()).collect();
        assert_eq!(battles, vec![2, 1, 1]);
        assert_eq!(result.rounds[0].bye.as_deref(), Some("f4"));
        assert!(result.rounds[1].bye.is_some());
        assert_eq!(result.rounds[2].bye, None);
        assert_eq!(result.battle_count(), 4);
    }

    #[test]
    fn test_battle_count_is_entrants_minus_one() {
        let entries: Vec<FighterData> = (0..7)
            .map(|i| entrant(&format!("f{i}"), 20 + i * 10, 10 + i))
            .collect();
        let roster = roster(&entries);
        let ids: Vec<String> = roster.ids().map(str::to_string).collect();

        let result = run_tournament(&roster, &ids, BattleConfig::default(), &mut SeededSource::from_seed(11))
            .expect("valid");
        assert_eq!(result.rounds.len(), 3);
        assert_eq!(result.battle_count(), 6);
        assert!(result.champion.is_some());
    }
}
