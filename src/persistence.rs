//! Progress persistence for sql-drill.
//!
//! Remembers the last visited question index across process restarts.
//! The file is tiny JSON; losing it only costs the user their place.

use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Serialize, Deserialize)]
struct ProgressRecord {
    index: usize,
}

/// File-backed store for the current question index.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default progress path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sql-drill")
            .join("progress.json")
    }

    /// Returns the path this store writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the last saved index, defaulting to 0 when the file is
    /// absent or corrupt.
    pub fn load(&self) -> usize {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<ProgressRecord>(&content) {
                Ok(record) => record.index,
                Err(e) => {
                    warn!(
                        "Corrupt progress file at {}: {e}; starting from question 1",
                        self.path.display()
                    );
                    0
                }
            },
            Err(_) => 0,
        }
    }

    /// Saves the index synchronously. Failures are reported so the host
    /// can warn; the session continues with in-memory state either way.
    pub fn save(&self, index: usize) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                QuizError::persistence(format!(
                    "Failed to create progress directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let content = serde_json::to_string(&ProgressRecord { index })
            .map_err(|e| QuizError::persistence(format!("Failed to encode progress: {e}")))?;

        std::fs::write(&self.path, content).map_err(|e| {
            QuizError::persistence(format!(
                "Failed to write progress to {}: {e}",
                self.path.display()
            ))
        })
    }
}
