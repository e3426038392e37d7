//! File-based repository implementations.

mod state;

pub use state::{FileStateRepository, STORAGE_KEY};
