//! Roster loading from RON files.
//!
//! A roster file lists fighter definitions in bracket-friendly order:
//!
//! ```ron
//! RosterFile(
//!     fighters: [
//!         (
//!             id: "ember",
//!             name: "Ember",
//!             stats: (hp: 120, attack: 70, defense: 40, speed: 90, special: 85, cost: 30),
//!             abilities: ["Flame Burst"],
//!             rarity: rare,
//!         ),
//!     ],
//! )
//! ```
//!
//! Entries that fail validation are skipped with a warning so one bad line
//! does not take down the whole roster.

use std::fs;
use std::path::{Path, PathBuf};

use arena_core::catalog::Roster;
use arena_core::data::FighterData;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validate::validate_fighters;

/// Environment variable naming the default roster file.
pub const ROSTER_ENV_VAR: &str = "ARENA_ROSTER";

/// On-disk roster layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterFile {
    /// Fighter definitions in file order.
    pub fighters: Vec<FighterData>,
}

/// Errors that can occur during roster loading.
#[derive(Debug, Error)]
pub enum RosterLoadError {
    /// Failed to read the file.
    #[error("IO error reading '{path}': {source}")]
    Io {
        /// Offending path.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse RON.
    #[error("Parse error in '{path}': {message}")]
    Parse {
        /// Offending path.
        path: String,
        /// Parser message.
        message: String,
    },

    /// No usable fighters remained after validation.
    #[error("Roster '{path}' has no valid fighters")]
    Empty {
        /// Offending path.
        path: String,
    },

    /// No roster path was given and no default location exists.
    #[error("No roster file found (pass --roster or set ARENA_ROSTER)")]
    NotFound,
}

/// Parse roster RON text without validating entries.
///
/// # Errors
///
/// Returns [`RosterLoadError::Parse`] if the text is not a roster.
pub fn parse_roster_file(content: &str, origin: &str) -> Result<RosterFile, RosterLoadError> {
    ron::from_str(content).map_err(|e| RosterLoadError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

/// Read and parse a roster file without validating entries.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_roster_file(path: &Path) -> Result<RosterFile, RosterLoadError> {
    let content = fs::read_to_string(path).map_err(|source| RosterLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_roster_file(&content, &path.display().to_string())
}

/// Build a roster from parsed entries, skipping any that fail validation.
///
/// # Errors
///
/// Returns [`RosterLoadError::Empty`] if no entry survives.
pub fn build_roster(file: RosterFile, origin: &str) -> Result<Roster, RosterLoadError> {
    let rejected: Vec<usize> = validate_fighters(&file.fighters)
        .into_iter()
        .map(|issue| {
            tracing::warn!("Skipping roster entry in {origin}: {issue}");
            issue.index
        })
        .collect();

    let roster: Roster = file
        .fighters
        .into_iter()
        .enumerate()
        .filter(|(index, _)| !rejected.contains(index))
        .map(|(_, fighter)| fighter)
        .collect();

    if roster.is_empty() {
        return Err(RosterLoadError::Empty {
            path: origin.to_string(),
        });
    }

    tracing::info!(
        fighters = roster.len(),
        skipped = rejected.len(),
        "Loaded roster from {origin}"
    );
    Ok(roster)
}

/// Load a roster from a RON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if it holds no
/// valid fighters.
pub fn load_roster(path: &Path) -> Result<Roster, RosterLoadError> {
    let file = read_roster_file(path)?;
    build_roster(file, &path.display().to_string())
}

/// Resolve the roster path to use when none is given.
///
/// Looks in order at:
/// 1. Environment variable `ARENA_ROSTER`
/// 2. `./data/roster.ron` (running from arena_tools)
/// 3. `./crates/arena_tools/data/roster.ron` (repo root)
pub fn default_roster_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(ROSTER_ENV_VAR) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    ["data/roster.ron", "crates/arena_tools/data/roster.ron"]
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

/// Load the roster at `path`, or at the default location when `None`.
///
/// # Errors
///
/// Returns [`RosterLoadError::NotFound`] if no path is given and no default
/// exists, or any error from [`load_roster`].
pub fn load_roster_or_default(path: Option<&Path>) -> Result<Roster, RosterLoadError> {
    match path {
        Some(path) => load_roster(path),
        None => {
            let path = default_roster_path().ok_or(RosterLoadError::NotFound)?;
            load_roster(&path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_FIGHTERS: &str = r#"
        RosterFile(
            fighters: [
                (
                    id: "ember",
                    name: "Ember",
                    stats: (hp: 120, attack: 70, defense: 40, speed: 90, special: 85, cost: 30),
                    abilities: ["Flame Burst"],
                    rarity: rare,
                ),
                (
                    id: "clerk",
                    name: "Clerk",
                    stats: (hp: 90, attack: 30, defense: 30, speed: 40, special: 20),
                ),
            ],
        )
    "#;

    #[test]
    fn test_parse_and_build() {
        let file = parse_roster_file(TWO_FIGHTERS, "inline").unwrap();
        assert_eq!(file.fighters.len(), 2);
        assert_eq!(file.fighters[1].stats.cost, 0);

        let roster = build_roster(file, "inline").unwrap();
        let ids: Vec<&str> = roster.ids().collect();
        assert_eq!(ids, vec!["ember", "clerk"]);
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let mut file = parse_roster_file(TWO_FIGHTERS, "inline").unwrap();
        let mut duplicate = file.fighters[0].clone();
        duplicate.name = "Second Ember".to_string();
        file.fighters.push(duplicate);

        let roster = build_roster(file, "inline").unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("ember").map(|f| f.name.as_str()), Some("Ember"));
    }

    #[test]
    fn test_all_invalid_is_empty_error() {
        let mut file = parse_roster_file(TWO_FIGHTERS, "inline").unwrap();
        for fighter in &mut file.fighters {
            fighter.stats.hp = 0;
        }

        let err = build_roster(file, "inline").unwrap_err();
        assert!(matches!(err, RosterLoadError::Empty { .. }));
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = parse_roster_file("RosterFile(fighters: 3)", "broken.ron").unwrap_err();
        assert!(matches!(err, RosterLoadError::Parse { ref path, .. } if path == "broken.ron"));
    }
}
