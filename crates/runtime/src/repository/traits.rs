//! Repository contract for saving and loading the table snapshot.

use serde_json::Value;
use tracker_core::GameState;

use super::Result;

/// Storage for the single current snapshot.
///
/// `load` hands back the raw stored document without interpreting it; callers
/// run it through [`tracker_core::migrate`] before use, since a stored
/// document may come from an older schema.
pub trait StateRepository: Send + Sync {
    /// Overwrite the stored snapshot.
    fn save(&self, state: &GameState) -> Result<()>;

    /// Read the stored document, or `None` when nothing usable is stored.
    fn load(&self) -> Result<Option<Value>>;

    /// Forget the stored snapshot.
    fn clear(&self) -> Result<()>;
}

impl<T: StateRepository + ?Sized> StateRepository for Box<T> {
    fn save(&self, state: &GameState) -> Result<()> {
        (**self).save(state)
    }

    fn load(&self) -> Result<Option<Value>> {
        (**self).load()
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
