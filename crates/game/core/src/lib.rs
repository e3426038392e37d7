//! Deterministic table state and transition engine for a shared-screen life
//! tracker.
//!
//! `tracker-core` defines the canonical snapshot ([`GameState`]), the action
//! vocabulary ([`Action`]) and the pure reducer ([`engine::reduce`]) that
//! maps one onto the other. With the `serde` feature it also owns the
//! persisted document shape and [`migration::migrate`], the only entry point
//! for snapshots coming back from storage.
//!
//! Nothing here performs I/O or reads a clock; randomness is injected through
//! [`env::RngOracle`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
#[cfg(feature = "serde")]
pub mod migration;
pub mod state;

pub use action::Action;
pub use config::GameConfig;
pub use engine::{GameEngine, reduce};
pub use env::{PcgRng, RngOracle};
#[cfg(feature = "serde")]
pub use migration::{MigrationError, migrate};
pub use state::{
    CounterKind, Counters, GameState, ModalTarget, ParsePlayerIdError, PlayerId, PlayerState,
    StateError,
};
