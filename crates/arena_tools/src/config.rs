//! Run configuration loaded from RON.
//!
//! ```ron
//! ArenaConfig(
//!     battle: (max_turns: 30),
//!     seed: Some(1234),
//! )
//! ```
//!
//! Every field is optional. Command-line flags override file values.

use std::fs;
use std::path::Path;

use arena_core::battle::BattleConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading an [`ArenaConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error reading '{path}': {source}")]
    Io {
        /// Offending path.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid config.
    #[error("Parse error in '{path}': {message}")]
    Parse {
        /// Offending path.
        path: String,
        /// Parser message.
        message: String,
    },
}

/// Settings for a command-line run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Battle settings shared by every battle in the run.
    pub battle: BattleConfig,
    /// Seed for the random source. A fresh seed is drawn when absent.
    pub seed: Option<u64>,
}

impl ArenaConfig {
    /// Parse a config from RON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid config.
    pub fn from_ron(content: &str, origin: &str) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron(&content, &path.display().to_string())
    }

    /// Apply command-line overrides on top of file values.
    #[must_use]
    pub fn with_overrides(mut self, max_turns: Option<u32>, seed: Option<u64>) -> Self {
        if let Some(max_turns) = max_turns {
            self.battle.max_turns = max_turns;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}
