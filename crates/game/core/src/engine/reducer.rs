use crate::config::GameConfig;
use crate::state::{CounterKind, GameState, ModalTarget, PlayerId, PlayerState};

/// Wraps mutable access to [`GameState`] with structured sub-reducers.
///
/// Only ever handed a private copy of the previous snapshot, so partial
/// updates are never observable.
pub struct StateReducer<'a> {
    state: &'a mut GameState,
}

impl<'a> StateReducer<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    pub fn players(&mut self) -> PlayersReducer<'_> {
        PlayersReducer {
            players: &mut self.state.players,
        }
    }

    /// Replaces the whole snapshot.
    pub fn replace(&mut self, next: GameState) {
        *self.state = next;
    }

    /// Shows one more seat. Returns false when already at the maximum.
    pub fn show_seat(&mut self) -> bool {
        if self.state.visible_count >= GameConfig::MAX_PLAYERS {
            return false;
        }
        self.state.visible_count += 1;
        true
    }

    /// Hides the last visible seat and drops any selection or modal target
    /// that pointed at it. Returns the hidden seat, or `None` at the minimum.
    pub fn hide_seat(&mut self) -> Option<PlayerId> {
        if self.state.visible_count <= GameConfig::MIN_PLAYERS {
            return None;
        }
        self.state.visible_count -= 1;
        let hidden = self.state.players[self.state.visible_count].id;

        if self.state.selected == Some(hidden) {
            self.state.selected = None;
        }
        if self.state.modal.player() == Some(hidden) {
            self.state.modal = ModalTarget::None;
        }
        Some(hidden)
    }

    pub fn set_selected(&mut self, selected: Option<PlayerId>) {
        self.state.selected = selected;
    }

    pub fn set_modal(&mut self, modal: ModalTarget) {
        self.state.modal = modal;
    }

    /// Resets every seat and leaves selection and modal target empty.
    /// The visible seat count is untouched.
    pub fn reset(&mut self) {
        self.players().reset_all();
        self.state.selected = None;
        self.state.modal = ModalTarget::None;
    }
}

pub struct PlayersReducer<'a> {
    players: &'a mut [PlayerState; GameConfig::MAX_PLAYERS],
}

impl<'a> PlayersReducer<'a> {
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut PlayerState> {
        self.players.iter_mut().find(|player| player.id == id)
    }

    pub fn adjust_life(&mut self, id: PlayerId, delta: i32) -> Option<i32> {
        Some(self.player_mut(id)?.adjust_life(delta))
    }

    /// Records damage dealt by `source` to `target`.
    ///
    /// No-op when either player is unknown or when a player is named as its
    /// own source.
    pub fn adjust_commander_damage(
        &mut self,
        source: PlayerId,
        target: PlayerId,
        delta: i32,
    ) -> Option<u32> {
        if source == target || !self.players.iter().any(|player| player.id == source) {
            return None;
        }
        Some(self.player_mut(target)?.adjust_commander_damage(source, delta))
    }

    pub fn adjust_counter(&mut self, id: PlayerId, kind: CounterKind, delta: i32) -> Option<u32> {
        Some(self.player_mut(id)?.counters.adjust(kind, delta))
    }

    pub fn reset_all(&mut self) {
        self.players.iter_mut().for_each(PlayerState::reset);
    }
}
