//! Error types for battles and tournaments.

use thiserror::Error;

/// Result type alias using [`ArenaError`].
pub type Result<T> = std::result::Result<T, ArenaError>;

/// Top-level error type for the arena core.
///
/// Both variants are expected, user-facing conditions. They are returned
/// before any fighter state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ArenaError {
    /// A requested fighter id has no catalog entry.
    #[error("Unknown fighter: {0}")]
    UnknownFighter(String),

    /// A tournament was requested with fewer than two entrants.
    #[error("Tournament needs at least 2 participants, got {count}")]
    InsufficientParticipants {
        /// Number of ids supplied.
        count: usize,
    },
}
