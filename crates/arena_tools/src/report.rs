//! JSON run reports.
//!
//! Every run is written together with the seed and turn cap that produced
//! it, so the exact same output can be regenerated later.

use std::fs;
use std::path::Path;

use arena_core::battle::BattleConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization failed.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file could not be written.
    #[error("IO error writing '{path}': {source}")]
    Io {
        /// Output path.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// A battle or tournament result plus everything needed to replay it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport<T> {
    /// Seed the random source was built from.
    pub seed: u64,
    /// Battle settings used for every battle in the run.
    pub battle: BattleConfig,
    /// The run's result.
    pub result: T,
}

impl<T: Serialize> RunReport<T> {
    /// Wrap a result with its run parameters.
    #[must_use]
    pub fn new(seed: u64, battle: BattleConfig, result: T) -> Self {
        Self {
            seed,
            battle,
            result,
        }
    }

    /// Render as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the result cannot be serialized.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON report to `output`, or to stdout when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn write(&self, output: Option<&Path>) -> Result<(), ReportError> {
        let json = self.to_json()?;
        match output {
            Some(path) => {
                fs::write(path, json).map_err(|source| ReportError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                tracing::info!("Report saved to: {}", path.display());
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}
