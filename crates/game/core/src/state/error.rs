//! State validation errors.
//!
//! Raised when a snapshot assembled from outside the engine (a persisted
//! document, a hand-built fixture) breaks one of the table invariants.
//! The reducer itself never produces these.

use crate::state::{CounterKind, PlayerId};

/// Invariant violations found while validating a [`GameState`](super::GameState).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// The seat list does not hold exactly `MAX_PLAYERS` entries.
    #[error("expected {expected} seats, found {found}")]
    WrongSeatCount { expected: usize, found: usize },

    /// Two seats share one identifier.
    #[error("player id {0} appears more than once")]
    DuplicatePlayerId(PlayerId),

    /// Visible count outside `[MIN_PLAYERS, MAX_PLAYERS]`.
    #[error("visible count {count} outside [{min}, {max}]")]
    VisibleCountOutOfRange { count: usize, min: usize, max: usize },

    /// Only one of the counter-mode fields was set.
    #[error("counter mode needs both a counter type and a player")]
    HalfSetCounterMode,

    /// Commander mode and counter mode were both set.
    #[error("commander source {commander} and counter target {kind} on {player} are both active")]
    ConflictingModes {
        commander: PlayerId,
        kind: CounterKind,
        player: PlayerId,
    },

    /// The modal increment target points at a hidden or unknown seat.
    #[error("modal target {0} is not a visible player")]
    HiddenModalTarget(PlayerId),
}
