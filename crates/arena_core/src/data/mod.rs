//! Data structures for fighter definitions.
//!
//! These are the records a fighter catalog hands to the core. They are
//! designed to be deserialized from RON or JSON.
//!
//! **Note:** This module contains no IO - it only defines data types.
//! File loading is handled by `arena_tools`.

mod fighter_data;

pub use fighter_data::{CombatStats, FighterData};
