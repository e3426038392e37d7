//! Action vocabulary.
//!
//! Every change to a [`GameState`](crate::state::GameState) is described by
//! one [`Action`] value and applied by [`crate::engine::reduce`]. Actions are
//! already-resolved intents: gesture timing and routing between life,
//! commander damage and counters happen before an action is built.

use crate::state::{CounterKind, GameState, PlayerId};

/// Every transition the engine understands.
///
/// Serialized form is `{"type": "INCREMENT_LIFE", "playerId": "p0", "delta": 5}`.
/// Unrecognised `type` tags decode to [`Action::Unknown`], which the engine
/// treats as a no-op.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        tag = "type",
        rename_all = "SCREAMING_SNAKE_CASE",
        rename_all_fields = "camelCase"
    )
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Adds `delta` to one player's life. No bounds.
    IncrementLife { player_id: PlayerId, delta: i32 },

    /// Shows one more seat, saturating at `MAX_PLAYERS`.
    AddPlayer,

    /// Hides the last visible seat, saturating at `MIN_PLAYERS`. The seat's
    /// data is kept for when it is shown again.
    RemovePlayer,

    /// Highlights a uniformly chosen visible player.
    SelectRandomPlayer,

    /// Sets or clears the highlight without checking visibility.
    SetSelected { player_id: Option<PlayerId> },

    ClearSelection,

    /// Restores starting life, empties damage and counters, leaves every mode.
    /// The visible seat count is kept.
    ResetGame,

    /// Enters commander mode for `source_player_id`, switches the source, or
    /// leaves the mode when the same source is toggled again.
    ToggleCommanderDamageView { source_player_id: PlayerId },

    /// Adds `delta` to the damage `target_player_id` has taken from
    /// `source_player_id`, flooring at zero. Life is not touched.
    IncrementCommanderDamage {
        source_player_id: PlayerId,
        target_player_id: PlayerId,
        delta: i32,
    },

    /// Enters counter mode for the pair, replaces the active pair, or leaves
    /// the mode when the exact active pair is toggled again.
    ToggleCounterView {
        counter_type: CounterKind,
        player_id: PlayerId,
    },

    /// Adds `delta` to one counter, flooring at zero.
    IncrementCounter {
        player_id: PlayerId,
        counter_type: CounterKind,
        delta: i32,
    },

    /// Replaces the whole snapshot. The caller supplies an already migrated
    /// and validated state.
    Hydrate { state: Box<GameState> },

    /// Anything the engine does not recognise.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl Action {
    pub fn increment_life(player_id: PlayerId, delta: i32) -> Self {
        Self::IncrementLife { player_id, delta }
    }

    pub fn toggle_commander(source_player_id: PlayerId) -> Self {
        Self::ToggleCommanderDamageView { source_player_id }
    }

    pub fn increment_commander_damage(source: PlayerId, target: PlayerId, delta: i32) -> Self {
        Self::IncrementCommanderDamage {
            source_player_id: source,
            target_player_id: target,
            delta,
        }
    }

    pub fn toggle_counter(counter_type: CounterKind, player_id: PlayerId) -> Self {
        Self::ToggleCounterView {
            counter_type,
            player_id,
        }
    }

    pub fn increment_counter(player_id: PlayerId, counter_type: CounterKind, delta: i32) -> Self {
        Self::IncrementCounter {
            player_id,
            counter_type,
            delta,
        }
    }

    pub fn hydrate(state: GameState) -> Self {
        Self::Hydrate {
            state: Box::new(state),
        }
    }

    /// Stable tag name, matching the serialized `type` field.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}
