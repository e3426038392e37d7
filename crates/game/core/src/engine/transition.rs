//! Action dispatch onto the sub-reducers.

use super::reducer::StateReducer;
use crate::action::Action;
use crate::env::RngOracle;

/// Applies one action to the working copy held by `reducer`.
///
/// Total over every action: anything that cannot apply (unknown player,
/// saturated seat count, hidden modal target) leaves the copy untouched.
pub(super) fn apply_action<R>(reducer: &mut StateReducer<'_>, action: &Action, rng: &mut R)
where
    R: RngOracle + ?Sized,
{
    match action {
        Action::IncrementLife { player_id, delta } => {
            reducer.players().adjust_life(*player_id, *delta);
        }

        Action::AddPlayer => {
            reducer.show_seat();
        }

        Action::RemovePlayer => {
            reducer.hide_seat();
        }

        Action::SelectRandomPlayer => {
            let visible = reducer.state().visible_players();
            if visible.is_empty() {
                return;
            }
            let seat = rng.pick_index(visible.len());
            let chosen = visible[seat].id;
            reducer.set_selected(Some(chosen));
        }

        Action::SetSelected { player_id } => reducer.set_selected(*player_id),

        Action::ClearSelection => reducer.set_selected(None),

        Action::ResetGame => reducer.reset(),

        Action::ToggleCommanderDamageView { source_player_id } => {
            if !reducer.state().is_visible(*source_player_id) {
                return;
            }
            let next = reducer.state().modal.toggled_commander(*source_player_id);
            reducer.set_modal(next);
        }

        Action::IncrementCommanderDamage {
            source_player_id,
            target_player_id,
            delta,
        } => {
            reducer
                .players()
                .adjust_commander_damage(*source_player_id, *target_player_id, *delta);
        }

        Action::ToggleCounterView {
            counter_type,
            player_id,
        } => {
            if !reducer.state().is_visible(*player_id) {
                return;
            }
            let next = reducer
                .state()
                .modal
                .toggled_counter(*counter_type, *player_id);
            reducer.set_modal(next);
        }

        Action::IncrementCounter {
            player_id,
            counter_type,
            delta,
        } => {
            reducer
                .players()
                .adjust_counter(*player_id, *counter_type, *delta);
        }

        Action::Hydrate { state } => reducer.replace(state.as_ref().clone()),

        Action::Unknown => {}
    }
}
