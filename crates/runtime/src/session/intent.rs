//! UI-level intents and how they resolve onto engine actions.

use tracker_core::{Action, CounterKind, GameState, PlayerId};

/// Something a player did on the table, before routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Resolved tap or hold on a seat's life total.
    AdjustLife { player: PlayerId, delta: i32 },
    AddPlayer,
    RemovePlayer,
    PickRandomPlayer,
    Select(Option<PlayerId>),
    ResetGame,
    /// Enter or leave commander-damage entry with `source` as the dealer.
    ToggleCommanderDamage(PlayerId),
    /// Enter or leave counter entry for `player`'s `kind` counter.
    ToggleCounter { kind: CounterKind, player: PlayerId },
}

impl Intent {
    /// Whether the selection highlight is dropped before this intent applies.
    pub const fn clears_selection(&self) -> bool {
        !matches!(self, Self::PickRandomPlayer | Self::Select(_))
    }

    /// Resolves the intent against the current table.
    pub fn to_action(self, state: &GameState) -> Action {
        match self {
            Self::AdjustLife { player, delta } => route_adjustment(state, player, delta),
            Self::AddPlayer => Action::AddPlayer,
            Self::RemovePlayer => Action::RemovePlayer,
            Self::PickRandomPlayer => Action::SelectRandomPlayer,
            Self::Select(player_id) => Action::SetSelected { player_id },
            Self::ResetGame => Action::ResetGame,
            Self::ToggleCommanderDamage(source) => Action::toggle_commander(source),
            Self::ToggleCounter { kind, player } => Action::toggle_counter(kind, player),
        }
    }
}

/// Picks the one destination of a life-total gesture on `player`.
///
/// Priority: active commander source, then active counter target (which
/// adjusts the counter owner regardless of the tapped seat), then plain life.
pub fn route_adjustment(state: &GameState, player: PlayerId, delta: i32) -> Action {
    if let Some(source) = state.commander_source() {
        return Action::increment_commander_damage(source, player, delta);
    }
    if let Some((kind, owner)) = state.counter_target() {
        return Action::increment_counter(owner, kind, delta);
    }
    Action::increment_life(player, delta)
}
