//! Fighter catalog lookup.
//!
//! The core never loads definitions itself. Callers hand it anything that
//! implements [`FighterCatalog`]; [`Roster`] is the in-memory version used by
//! the tools and tests.

use std::collections::HashMap;

use crate::data::FighterData;
use crate::rarity::Rarity;

/// Lookup from fighter id to definition.
pub trait FighterCatalog {
    /// Get the definition for `id`, if the catalog has one.
    fn fighter(&self, id: &str) -> Option<&FighterData>;

    /// Check if the catalog knows `id`.
    fn contains(&self, id: &str) -> bool {
        self.fighter(id).is_some()
    }
}

impl FighterCatalog for HashMap<String, FighterData> {
    fn fighter(&self, id: &str) -> Option<&FighterData> {
        self.get(id)
    }
}

/// In-memory fighter catalog that remembers insertion order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    fighters: Vec<FighterData>,
    index: HashMap<String, usize>,
}

impl Roster {
    /// Create a new empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition, replacing any existing one with the same id.
    ///
    /// Returns the replaced definition. A replaced entry keeps its original
    /// position in [`Roster::ids`].
    pub fn insert(&mut self, data: FighterData) -> Option<FighterData> {
        if let Some(&slot) = self.index.get(&data.id) {
            return Some(std::mem::replace(&mut self.fighters[slot], data));
        }
        self.index.insert(data.id.clone(), self.fighters.len());
        self.fighters.push(data);
        None
    }

    /// Get a definition by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FighterData> {
        self.index.get(id).map(|&slot| &self.fighters[slot])
    }

    /// All ids, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.fighters.iter().map(|f| f.id.as_str())
    }

    /// All definitions, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FighterData> {
        self.fighters.iter()
    }

    /// Definitions of the given rarity, in insertion order.
    pub fn by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &FighterData> {
        self.fighters.iter().filter(move |f| f.rarity == rarity)
    }

    /// Number of fighters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }
}

impl FighterCatalog for Roster {
    fn fighter(&self, id: &str) -> Option<&FighterData> {
        self.get(id)
    }
}

impl FromIterator<FighterData> for Roster {
    fn from_iter<T: IntoIterator<Item = FighterData>>(iter: T) -> Self {
        let mut roster = Self::new();
        for data in iter {
            roster.insert(data);
        }
        roster
    }
}

impl Extend<FighterData> for Roster {
    fn extend<T: IntoIterator<Item = FighterData>>(&mut self, iter: T) {
        for data in iter {
            self.insert(data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CombatStats;

    fn data(id: &str, rarity: Rarity) -> FighterData {
        FighterData::new(id, id.to_uppercase(), CombatStats::default(), rarity)
    }

    #[test]
    fn test_roster_new() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert!(!roster.contains("anyone"));
    }

    #[test]
    fn test_insert_and_lookup() {
        let roster: Roster = [data("a", Rarity::Common), data("b", Rarity::Epic)]
            .into_iter()
            .collect();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.fighter("b").map(|f| f.name.as_str()), Some("B"));
        assert!(roster.fighter("c").is_none());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut roster: Roster = [data("a", Rarity::Common), data("b", Rarity::Common)]
            .into_iter()
            .collect();

        let replaced = roster.insert(data("a", Rarity::Legendary));
        assert_eq!(replaced.map(|f| f.rarity), Some(Rarity::Common));
        assert_eq!(roster.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(roster.get("a").map(|f| f.rarity), Some(Rarity::Legendary));
    }

    #[test]
    fn test_by_rarity() {
        let roster: Roster = [
            data("a", Rarity::Rare),
            data("b", Rarity::Common),
            data("c", Rarity::Rare),
        ]
        .into_iter()
        .collect();

        let rare: Vec<&str> = roster.by_rarity(Rarity::Rare).map(|f| f.id.as_str()).collect();
        assert_eq!(rare, vec!["a", "c"]);
    }

    #[test]
    fn test_hashmap_catalog() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), data("a", Rarity::Common));
        assert!(map.contains("a"));
        assert!(!FighterCatalog::contains(&map, "z"));
    }
}
