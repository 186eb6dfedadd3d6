//! Roster validation.
//!
//! The core accepts any stat line, but some entries are almost certainly
//! data mistakes: a blank id, a fighter that starts dead, an ability with no
//! name, or two entries sharing an id.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use arena_core::data::FighterData;

use crate::roster_loader::{read_roster_file, RosterLoadError};

/// What is wrong with a roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    /// The id is empty or whitespace.
    BlankId,
    /// An earlier entry already uses this id.
    DuplicateId,
    /// Max HP is zero, so the fighter loses before its first turn.
    ZeroHp,
    /// An ability name is empty or whitespace.
    BlankAbility,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::BlankId => "id is blank",
            Self::DuplicateId => "id is already used by an earlier entry",
            Self::ZeroHp => "hp is zero",
            Self::BlankAbility => "an ability name is blank",
        };
        f.write_str(text)
    }
}

/// A problem found in one roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Position of the entry in the file.
    pub index: usize,
    /// The entry's id as written.
    pub id: String,
    /// What is wrong with it.
    pub problem: Problem,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry {} ('{}'): {}", self.index, self.id, self.problem)
    }
}

/// Check every entry, returning all issues in file order.
#[must_use]
pub fn validate_fighters(fighters: &[FighterData]) -> Vec<Issue> {
    let mut seen = HashSet::new();
    let mut issues = Vec::new();

    for (index, fighter) in fighters.iter().enumerate() {
        let mut report = |problem| {
            issues.push(Issue {
                index,
                id: fighter.id.clone(),
                problem,
            });
        };

        if fighter.id.trim().is_empty() {
            report(Problem::BlankId);
        } else if !seen.insert(fighter.id.as_str()) {
            report(Problem::DuplicateId);
        }
        if fighter.stats.hp == 0 {
            report(Problem::ZeroHp);
        }
        if fighter.abilities.iter().any(|a| a.trim().is_empty()) {
            report(Problem::BlankAbility);
        }
    }

    issues
}

/// Validate a roster file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed. Entry problems are
/// returned as issues, not errors.
pub fn validate_roster_file(path: &Path) -> Result<Vec<Issue>, RosterLoadError> {
    let file = read_roster_file(path)?;
    Ok(validate_fighters(&file.fighters))
}
