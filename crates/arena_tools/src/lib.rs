//! # Arena Tools
//!
//! Command-line front end for the arena core:
//! - Roster loading from RON files
//! - Run configuration (turn cap, seed)
//! - Roster validation
//! - JSON run reports

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod report;
pub mod roster_loader;
pub mod validate;
