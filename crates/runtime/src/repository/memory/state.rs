//! In-memory StateRepository implementation for tests and local runs.

use std::sync::RwLock;

use serde_json::Value;
use tracker_core::GameState;

use crate::repository::{RepositoryError, Result, StateRepository};

/// In-memory implementation of StateRepository.
///
/// Stores the serialized document rather than the typed state so loads go
/// through the same migration path as the file-backed repository.
pub struct InMemoryStateRepo {
    document: RwLock<Option<Value>>,
}

impl InMemoryStateRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            document: RwLock::new(None),
        }
    }

    /// Create with a pre-existing raw document, e.g. one written by an older
    /// schema.
    pub fn with_document(document: Value) -> Self {
        Self {
            document: RwLock::new(Some(document)),
        }
    }
}

impl Default for InMemoryStateRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRepository for InMemoryStateRepo {
    fn save(&self, state: &GameState) -> Result<()> {
        let value = serde_json::to_value(state)?;
        let mut document = self
            .document
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *document = Some(value);
        Ok(())
    }

    fn load(&self) -> Result<Option<Value>> {
        let document = self
            .document
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(document.clone())
    }

    fn clear(&self) -> Result<()> {
        let mut document = self
            .document
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *document = None;
        Ok(())
    }
}
