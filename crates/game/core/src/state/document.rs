//! Persisted document shape of [`GameState`].
//!
//! The document keeps the flat layout older snapshots used (separate
//! commander-source and counter-mode fields); the in-memory state folds them
//! into a single [`ModalTarget`].

use serde::{Deserialize, Serialize};

use super::{CounterKind, GameState, ModalTarget, PlayerId, PlayerState, StateError};
use crate::config::GameConfig;

/// Current-schema document as stored by the persistence layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDocument {
    pub version: u32,
    pub players: Vec<PlayerState>,
    pub visible_count: usize,
    #[serde(default)]
    pub selected_player_id: Option<PlayerId>,
    #[serde(default)]
    pub commander_damage_source_id: Option<PlayerId>,
    #[serde(default)]
    pub active_counter_type: Option<CounterKind>,
    #[serde(default)]
    pub active_counter_player_id: Option<PlayerId>,
}

impl SnapshotDocument {
    /// Folds the flat mode fields into one modal target.
    pub fn modal(&self) -> Result<ModalTarget, StateError> {
        let counter = match (self.active_counter_type, self.active_counter_player_id) {
            (Some(kind), Some(player)) => Some((kind, player)),
            (None, None) => None,
            _ => return Err(StateError::HalfSetCounterMode),
        };

        match (self.commander_damage_source_id, counter) {
            (Some(commander), Some((kind, player))) => Err(StateError::ConflictingModes {
                commander,
                kind,
                player,
            }),
            (Some(source), None) => Ok(ModalTarget::CommanderSource(source)),
            (None, Some((kind, player))) => Ok(ModalTarget::CounterTarget { kind, player }),
            (None, None) => Ok(ModalTarget::None),
        }
    }
}

impl From<GameState> for SnapshotDocument {
    fn from(state: GameState) -> Self {
        let (active_counter_type, active_counter_player_id) = match state.modal.counter_target() {
            Some((kind, player)) => (Some(kind), Some(player)),
            None => (None, None),
        };

        Self {
            version: state.version,
            commander_damage_source_id: state.modal.commander_source(),
            players: Vec::from(state.players),
            visible_count: state.visible_count,
            selected_player_id: state.selected,
            active_counter_type,
            active_counter_player_id,
        }
    }
}

impl TryFrom<SnapshotDocument> for GameState {
    type Error = StateError;

    fn try_from(document: SnapshotDocument) -> Result<Self, Self::Error> {
        let modal = document.modal()?;
        let found = document.players.len();
        let players: [PlayerState; GameConfig::MAX_PLAYERS] =
            document
                .players
                .try_into()
                .map_err(|_| StateError::WrongSeatCount {
                    expected: GameConfig::MAX_PLAYERS,
                    found,
                })?;

        let state = GameState {
            version: document.version,
            players,
            visible_count: document.visible_count,
            selected: document.selected_player_id,
            modal,
        };
        state.validate()?;
        Ok(state)
    }
}
