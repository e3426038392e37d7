//! Authoritative game state representation.
//!
//! This module owns the seat records, the table-level fields (visible count,
//! selection, modal increment target) and the validation rules they obey.
//! Runtime layers clone or query this state but replace it exclusively
//! through the engine.
#[cfg(feature = "serde")]
mod document;
mod error;
pub mod types;

#[cfg(feature = "serde")]
pub use document::SnapshotDocument;
pub use error::StateError;
pub use types::{
    CounterKind, Counters, ModalTarget, ParsePlayerIdError, PlayerId, PlayerState,
};

use crate::config::GameConfig;

/// Canonical snapshot of the table.
///
/// Every transition produces a new value; nothing inside is shared with the
/// previous snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SnapshotDocument", into = "SnapshotDocument")
)]
pub struct GameState {
    /// Schema tag, see [`GameConfig::SCHEMA_VERSION`].
    pub version: u32,

    /// All seats, visible or not. Never resized.
    pub players: [PlayerState; GameConfig::MAX_PLAYERS],

    /// Only `players[..visible_count]` take part in the game.
    pub visible_count: usize,

    /// Transient highlight ("who goes first"). Not validated on write.
    pub selected: Option<PlayerId>,

    /// Where increment gestures are redirected, if anywhere.
    pub modal: ModalTarget,
}

impl GameState {
    /// Creates a fresh table with every seat at starting life and
    /// `visible_count` seats shown (clamped to the allowed range).
    pub fn new(visible_count: usize) -> Self {
        Self {
            version: GameConfig::SCHEMA_VERSION,
            players: std::array::from_fn(PlayerState::for_seat),
            visible_count: GameConfig::clamp_visible(visible_count),
            selected: None,
            modal: ModalTarget::None,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.initial_visible_players)
    }

    /// Seats currently in play.
    pub fn visible_players(&self) -> &[PlayerState] {
        &self.players[..self.visible_count.min(GameConfig::MAX_PLAYERS)]
    }

    /// Seat index of `id`, visible or hidden.
    pub fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|player| player.id == id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerState> {
        self.players.iter().find(|player| player.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut PlayerState> {
        self.players.iter_mut().find(|player| player.id == id)
    }

    pub fn is_visible(&self, id: PlayerId) -> bool {
        self.seat_of(id)
            .is_some_and(|seat| seat < self.visible_count)
    }

    pub fn commander_source(&self) -> Option<PlayerId> {
        self.modal.commander_source()
    }

    pub fn counter_target(&self) -> Option<(CounterKind, PlayerId)> {
        self.modal.counter_target()
    }

    /// Checks the table invariants that hold after every transition.
    ///
    /// Selection is not checked: it is a cosmetic lookup key and
    /// may be written without validation.
    pub fn validate(&self) -> Result<(), StateError> {
        for (seat, player) in self.players.iter().enumerate() {
            if self.players[..seat].iter().any(|other| other.id == player.id) {
                return Err(StateError::DuplicatePlayerId(player.id));
            }
        }

        if !(GameConfig::MIN_PLAYERS..=GameConfig::MAX_PLAYERS).contains(&self.visible_count) {
            return Err(StateError::VisibleCountOutOfRange {
                count: self.visible_count,
                min: GameConfig::MIN_PLAYERS,
                max: GameConfig::MAX_PLAYERS,
            });
        }

        if let Some(target) = self.modal.player()
            && !self.is_visible(target)
        {
            return Err(StateError::HiddenModalTarget(target));
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::DEFAULT_VISIBLE_PLAYERS)
    }
}
