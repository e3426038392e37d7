//! Environment facts the engine reads but does not own.
//!
//! The table has no static content, so the only environment input is the
//! random source used by random seat selection.
pub mod rng;

pub use rng::{PcgRng, RngOracle};
