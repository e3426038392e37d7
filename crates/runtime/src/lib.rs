//! Runtime collaborators around the pure tracker engine.
//!
//! Modules are organized by responsibility:
//! - [`session`] owns the current snapshot and the dispatch policies
//! - [`repository`] stores and restores the snapshot
//! - [`input`] turns press-and-hold timing into discrete deltas
//! - [`config`] reads runtime settings from the environment
pub mod config;
pub mod input;
pub mod repository;
pub mod session;

pub use config::RuntimeConfig;
pub use input::{Direction, HoldGesture, Steps};
pub use repository::{
    FileStateRepository, InMemoryStateRepo, RepositoryError, STORAGE_KEY, StateRepository,
    load_or_default,
};
pub use session::{Intent, Session, route_adjustment};
