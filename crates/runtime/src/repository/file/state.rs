//! File-based StateRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracker_core::GameState;

use crate::repository::{Result, StateRepository};

/// Base name of the snapshot document.
pub const STORAGE_KEY: &str = "edh-tracker-state";

/// File-based implementation of StateRepository.
///
/// Keeps exactly one pretty-printed JSON document, `<dir>/edh-tracker-state.json`.
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous snapshot intact.
pub struct FileStateRepository {
    path: PathBuf,
}

impl FileStateRepository {
    /// Create a repository rooted at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir)?;
        Ok(Self {
            path: base_dir.join(format!("{STORAGE_KEY}.json")),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, state: &GameState) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(state)?;
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved snapshot to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Option<Value>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(document) => {
                tracing::debug!("Loaded snapshot from {}", self.path.display());
                Ok(Some(document))
            }
            Err(error) => {
                tracing::warn!(
                    "Ignoring unparseable snapshot at {}: {}",
                    self.path.display(),
                    error
                );
                Ok(None)
            }
        }
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!("Cleared snapshot at {}", self.path.display());
        }
        Ok(())
    }
}
