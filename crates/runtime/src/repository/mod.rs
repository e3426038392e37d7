//! Repository layer for the persisted table snapshot.
//!
//! There is exactly one snapshot: the current table. Repositories store it as
//! a raw JSON document; [`load_or_default`] turns whatever is stored back into
//! a valid [`tracker_core::GameState`], migrating older schemas on the way.

mod error;
mod file;
mod memory;
mod snapshot;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{FileStateRepository, STORAGE_KEY};
pub use memory::InMemoryStateRepo;
pub use snapshot::load_or_default;
pub use traits::StateRepository;
