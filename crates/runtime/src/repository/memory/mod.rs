//! In-memory repository implementations for testing and ephemeral sessions.

mod state;

pub use state::InMemoryStateRepo;
