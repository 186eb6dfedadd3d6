//! Roster and config loading from real files.

use std::fs;
use std::path::PathBuf;

use arena_core::battle::{run_battle, BattleConfig};
use arena_core::rarity::Rarity;
use arena_core::rng::SeededSource;
use arena_core::tournament::run_tournament;
use arena_tools::config::ArenaConfig;
use arena_tools::report::RunReport;
use arena_tools::roster_loader::{load_roster, load_roster_or_default, RosterLoadError};
use arena_tools::validate::{validate_roster_file, Problem};

fn bundled(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

#[test]
fn test_bundled_roster_loads_cleanly() {
    let path = bundled("roster.ron");
    assert!(validate_roster_file(&path).unwrap().is_empty());

    let roster = load_roster(&path).unwrap();
    assert_eq!(roster.len(), 6);
    assert_eq!(roster.get("oracle").map(|f| f.rarity), Some(Rarity::Legendary));
    assert_eq!(roster.get("quill").map(|f| f.rarity), Some(Rarity::Common));
}

#[test]
fn test_bundled_config_loads() {
    let config = ArenaConfig::load(&bundled("arena.ron")).unwrap();
    assert_eq!(config.battle.max_turns, 50);
    assert_eq!(config.seed, Some(2024));
}

#[test]
fn test_bundled_roster_runs_full_tournament() {
    let roster = load_roster(&bundled("roster.ron")).unwrap();
    let ids: Vec<String> = roster.ids().map(str::to_string).collect();

    let result = run_tournament(
        &roster,
        &ids,
        BattleConfig::default(),
        &mut SeededSource::from_seed(2024),
    )
    .unwrap();

    // 6 -> 3 -> 2 -> 1
    assert_eq!(result.rounds.len(), 3);
    assert_eq!(result.battle_count(), 5);
    assert!(result.rounds[1].bye.is_some());
}

#[test]
fn test_bad_entries_are_skipped_from_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.ron");
    fs::write(
        &path,
        r#"RosterFile(fighters: [
            (id: "a", name: "A", stats: (hp: 100, attack: 50, defense: 50, speed: 50, special: 50)),
            (id: "a", name: "A again", stats: (hp: 100, attack: 50, defense: 50, speed: 50, special: 50)),
            (id: "ghost", name: "Ghost", stats: (hp: 0, attack: 50, defense: 50, speed: 50, special: 50)),
            (id: "b", name: "B", stats: (hp: 100, attack: 50, defense: 50, speed: 50, special: 50)),
        ])"#,
    )
    .unwrap();

    let issues = validate_roster_file(&path).unwrap();
    let problems: Vec<Problem> = issues.iter().map(|issue| issue.problem).collect();
    assert_eq!(problems, vec![Problem::DuplicateId, Problem::ZeroHp]);

    let roster = load_roster(&path).unwrap();
    let ids: Vec<&str> = roster.ids().collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(roster.get("a").map(|f| f.name.as_str()), Some("A"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_roster_or_default(Some(&dir.path().join("nope.ron"))).unwrap_err();
    assert!(matches!(err, RosterLoadError::Io { .. }));
}

#[test]
fn test_report_written_to_file_replays() {
    let roster = load_roster(&bundled("roster.ron")).unwrap();
    let config = BattleConfig::default();
    let seed = 11;

    let result = run_battle(&roster, "ember", "granite", config, &mut SeededSource::from_seed(seed))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("battle.json");
    RunReport::new(seed, config, result.clone()).write(Some(&out)).unwrap();

    let saved: RunReport<arena_core::battle::BattleResult> =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(saved.result, result);

    let replay = run_battle(
        &roster,
        "ember",
        "granite",
        saved.battle,
        &mut SeededSource::from_seed(saved.seed),
    )
    .unwrap();
    assert_eq!(replay, result);
}
