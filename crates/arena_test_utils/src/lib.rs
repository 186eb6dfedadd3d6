//! # Arena Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Fighter fixtures and sample rosters
//! - Scripted random source with pinned rolls
//! - Determinism test harness
//! - Matchup statistics over many seeded battles
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod determinism;
pub mod fixtures;
pub mod matchup;
pub mod scripted;

/// Re-export proptest for convenience.
pub use proptest;
