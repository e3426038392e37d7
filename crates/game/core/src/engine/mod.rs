//! Transition engine.
//!
//! [`reduce`] is the authoritative reducer for [`GameState`]: it takes the
//! current snapshot and one [`Action`] and returns the next snapshot. The
//! input is never mutated. The only non-determinism is the seat draw for
//! [`Action::SelectRandomPlayer`], taken from the injected [`RngOracle`].
//!
//! The engine knows nothing about gesture routing or selection
//! clearing; those are caller policies layered on top.

mod reducer;
mod transition;

pub use reducer::{PlayersReducer, StateReducer};

use crate::action::Action;
use crate::env::RngOracle;
use crate::state::GameState;

/// Applies `action` to a copy of `state` and returns the copy.
pub fn reduce<R>(state: &GameState, action: &Action, rng: &mut R) -> GameState
where
    R: RngOracle + ?Sized,
{
    let mut next = state.clone();
    transition::apply_action(&mut StateReducer::new(&mut next), action, rng);
    next
}

/// Reducer bundled with the random source it draws from.
pub struct GameEngine<R> {
    rng: R,
}

impl<R: RngOracle> GameEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Produces the snapshot that follows `state` under `action`.
    pub fn reduce(&mut self, state: &GameState, action: &Action) -> GameState {
        reduce(state, action, &mut self.rng)
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::PcgRng;
    use crate::state::{CounterKind, ModalTarget, PlayerId};

    const P0: PlayerId = PlayerId(0);
    const P1: PlayerId = PlayerId(1);
    const P2: PlayerId = PlayerId(2);
    const P3: PlayerId = PlayerId(3);

    /// Replays fixed draws so random selection is predictable.
    struct ScriptedRng(Vec<u32>);

    impl RngOracle for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            self.0.remove(0)
        }
    }

    fn run(state: &GameState, actions: &[Action]) -> GameState {
        let mut engine = GameEngine::new(PcgRng::new(11));
        actions
            .iter()
            .fold(state.clone(), |current, action| engine.reduce(&current, action))
    }

    #[test]
    fn increment_life_touches_only_the_target() {
        let start = GameState::default();

        let after_gain = run(&start, &[Action::increment_life(P0, 5)]);
        assert_eq!(after_gain.players[0].life, 45);
        assert!(after_gain.players[1..].iter().all(|player| player.life == 40));

        let after_loss = run(&after_gain, &[Action::increment_life(P0, -12)]);
        assert_eq!(after_loss.players[0].life, 33);
    }

    #[test]
    fn life_can_go_negative() {
        let state = run(&GameState::default(), &[Action::increment_life(P1, -55)]);
        assert_eq!(state.players[1].life, -15);
    }

    #[test]
    fn increment_life_for_unknown_player_is_noop() {
        let start = GameState::default();
        assert_eq!(run(&start, &[Action::increment_life(PlayerId(9), 3)]), start);
    }

    #[test]
    fn reduce_leaves_input_untouched() {
        let start = GameState::default();
        let snapshot = start.clone();
        let _ = reduce(&start, &Action::ResetGame, &mut PcgRng::default());
        let _ = reduce(&start, &Action::increment_life(P0, 1), &mut PcgRng::default());
        assert_eq!(start, snapshot);
    }

    #[test]
    fn add_player_saturates_at_six() {
        let state = run(
            &GameState::default(),
            &[Action::AddPlayer, Action::AddPlayer, Action::AddPlayer],
        );
        assert_eq!(state.visible_count, GameConfig::MAX_PLAYERS);
    }

    #[test]
    fn remove_player_saturates_at_two() {
        let state = run(
            &GameState::default(),
            &[Action::RemovePlayer, Action::RemovePlayer, Action::RemovePlayer],
        );
        assert_eq!(state.visible_count, GameConfig::MIN_PLAYERS);
    }

    #[test]
    fn remove_then_add_restores_hidden_seat() {
        let start = run(
            &GameState::default(),
            &[
                Action::increment_life(P3, -7),
                Action::increment_counter(P3, CounterKind::Poison, 4),
                Action::increment_commander_damage(P0, P3, 9),
            ],
        );

        let hidden = run(&start, &[Action::RemovePlayer]);
        assert_eq!(hidden.visible_count, 3);
        assert!(!hidden.is_visible(P3));

        let restored = run(&hidden, &[Action::AddPlayer]);
        assert_eq!(restored, start);
    }

    #[test]
    fn remove_player_clears_selection_of_hidden_seat() {
        let state = run(
            &GameState::default(),
            &[Action::SetSelected { player_id: Some(P3) }, Action::RemovePlayer],
        );
        assert_eq!(state.selected, None);

        let kept = run(
            &GameState::default(),
            &[Action::SetSelected { player_id: Some(P1) }, Action::RemovePlayer],
        );
        assert_eq!(kept.selected, Some(P1));
    }

    #[test]
    fn remove_player_clears_modes_pointing_at_hidden_seat() {
        let commander = run(
            &GameState::default(),
            &[Action::toggle_commander(P3), Action::RemovePlayer],
        );
        assert_eq!(commander.modal, ModalTarget::None);

        let counter = run(
            &GameState::default(),
            &[
                Action::toggle_counter(CounterKind::Energy, P3),
                Action::RemovePlayer,
            ],
        );
        assert_eq!(counter.modal, ModalTarget::None);
    }

    #[test]
    fn select_random_player_draws_from_visible_seats() {
        let start = GameState::new(3);
        // 7 % 3 = 1
        let mut rng = ScriptedRng(vec![7]);
        let state = reduce(&start, &Action::SelectRandomPlayer, &mut rng);
        assert_eq!(state.selected, Some(P1));
    }

    #[test]
    fn select_random_player_never_picks_hidden_seats() {
        let start = GameState::new(2);
        let mut engine = GameEngine::new(PcgRng::new(99));
        for _ in 0..200 {
            let state = engine.reduce(&start, &Action::SelectRandomPlayer);
            let selected = state.selected.expect("a visible player is selected");
            assert!(state.is_visible(selected));
        }
    }

    #[test]
    fn set_selected_does_not_check_visibility() {
        let state = run(
            &GameState::new(2),
            &[Action::SetSelected { player_id: Some(PlayerId(5)) }],
        );
        assert_eq!(state.selected, Some(PlayerId(5)));

        let cleared = run(&state, &[Action::ClearSelection]);
        assert_eq!(cleared.selected, None);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_visible_count() {
        let messy = run(
            &GameState::new(5),
            &[
                Action::increment_life(P0, -30),
                Action::increment_life(PlayerId(5), 12),
                Action::increment_counter(P2, CounterKind::Radiation, 3),
                Action::increment_commander_damage(P1, P2, 8),
                Action::SetSelected { player_id: Some(P2) },
                Action::toggle_counter(CounterKind::Energy, P1),
            ],
        );

        let reset = run(&messy, &[Action::ResetGame]);

        assert_eq!(reset.visible_count, 5);
        assert_eq!(reset, GameState::new(5));
        for player in &reset.players {
            assert_eq!(player.life, 40);
            assert!(player.commander_damage.is_empty());
            assert!(player.counters.is_zero());
        }
        assert_eq!(reset.selected, None);
        assert_eq!(reset.modal, ModalTarget::None);
    }

    #[test]
    fn commander_toggle_twice_restores_snapshot() {
        let start = run(&GameState::default(), &[Action::increment_life(P2, 3)]);
        let toggled = run(&start, &[Action::toggle_commander(P1)]);
        assert_eq!(toggled.commander_source(), Some(P1));

        let back = run(&toggled, &[Action::toggle_commander(P1)]);
        assert_eq!(back, start);
    }

    #[test]
    fn commander_toggle_switches_source_directly() {
        let state = run(
            &GameState::default(),
            &[Action::toggle_commander(P1), Action::toggle_commander(P2)],
        );
        assert_eq!(state.modal, ModalTarget::CommanderSource(P2));
    }

    #[test]
    fn commander_toggle_ignores_hidden_players() {
        let start = GameState::new(2);
        assert_eq!(run(&start, &[Action::toggle_commander(P3)]), start);
    }

    #[test]
    fn commander_damage_clamps_at_zero() {
        let state = run(
            &GameState::default(),
            &[
                Action::toggle_commander(P1),
                Action::increment_commander_damage(P1, P2, 5),
            ],
        );
        assert_eq!(state.players[2].commander_damage_from(P1), 5);

        let clamped = run(&state, &[Action::increment_commander_damage(P1, P2, -20)]);
        assert_eq!(clamped.players[2].commander_damage_from(P1), 0);
    }

    #[test]
    fn commander_damage_does_not_touch_life() {
        let state = run(
            &GameState::default(),
            &[Action::increment_commander_damage(P0, P1, 21)],
        );
        assert_eq!(state.players[1].commander_damage_from(P0), 21);
        assert_eq!(state.players[1].life, 40);
    }

    #[test]
    fn commander_damage_from_self_or_unknown_source_is_noop() {
        let start = GameState::default();
        assert_eq!(
            run(&start, &[Action::increment_commander_damage(P2, P2, 4)]),
            start
        );
        assert_eq!(
            run(&start, &[Action::increment_commander_damage(PlayerId(8), P2, 4)]),
            start
        );
    }

    #[test]
    fn counter_toggle_cycle_keeps_count() {
        let state = run(
            &GameState::default(),
            &[
                Action::toggle_counter(CounterKind::Poison, P3),
                Action::increment_counter(P3, CounterKind::Poison, 3),
                Action::toggle_counter(CounterKind::Poison, P3),
            ],
        );
        assert_eq!(state.modal, ModalTarget::None);
        assert_eq!(state.players[3].counters.poison, 3);
    }

    #[test]
    fn counter_toggle_overwrites_pair() {
        let state = run(
            &GameState::default(),
            &[
                Action::toggle_counter(CounterKind::Poison, P3),
                Action::toggle_counter(CounterKind::Energy, P3),
            ],
        );
        assert_eq!(state.counter_target(), Some((CounterKind::Energy, P3)));

        let other = run(&state, &[Action::toggle_counter(CounterKind::Energy, P0)]);
        assert_eq!(other.counter_target(), Some((CounterKind::Energy, P0)));
    }

    #[test]
    fn counters_clamp_at_zero() {
        let state = run(
            &GameState::default(),
            &[
                Action::increment_counter(P0, CounterKind::CommanderCasts, 2),
                Action::increment_counter(P0, CounterKind::CommanderCasts, -5),
            ],
        );
        assert_eq!(state.players[0].counters.commander_casts, 0);
    }

    #[test]
    fn modes_replace_each_other() {
        let state = run(
            &GameState::default(),
            &[
                Action::toggle_counter(CounterKind::Poison, P1),
                Action::toggle_commander(P2),
            ],
        );
        assert_eq!(state.modal, ModalTarget::CommanderSource(P2));
        assert_eq!(state.counter_target(), None);
    }

    #[test]
    fn hydrate_replaces_snapshot_wholesale() {
        let replacement = run(&GameState::new(6), &[Action::increment_life(P0, 9)]);
        let state = run(
            &GameState::default(),
            &[Action::hydrate(replacement.clone())],
        );
        assert_eq!(state, replacement);
    }

    #[test]
    fn unknown_action_is_noop() {
        let start = run(&GameState::default(), &[Action::toggle_commander(P0)]);
        assert_eq!(run(&start, &[Action::Unknown]), start);
    }

    #[test]
    fn invariants_hold_across_long_random_sequences() {
        let mut script = PcgRng::new(2024);
        let mut engine = GameEngine::new(PcgRng::new(5));
        let mut state = GameState::default();
        let kinds = [
            CounterKind::Poison,
            CounterKind::Radiation,
            CounterKind::Energy,
            CounterKind::CommanderCasts,
        ];

        for _ in 0..5_000 {
            let player = PlayerId(script.pick_index(7) as u8);
            let other = PlayerId(script.pick_index(7) as u8);
            let delta = script.pick_index(61) as i32 - 30;
            let kind = kinds[script.pick_index(kinds.len())];
            let action = match script.pick_index(12) {
                0 => Action::increment_life(player, delta),
                1 => Action::AddPlayer,
                2 => Action::RemovePlayer,
                3 => Action::SelectRandomPlayer,
                4 => Action::ClearSelection,
                5 => Action::ResetGame,
                6 => Action::toggle_commander(player),
                7 => Action::increment_commander_damage(player, other, delta),
                8 => Action::toggle_counter(kind, player),
                9 => Action::increment_counter(player, kind, delta),
                10 => Action::SetSelected { player_id: None },
                _ => Action::Unknown,
            };

            let visible_before = state.visible_count;
            state = engine.reduce(&state, &action);

            assert_eq!(state.players.len(), GameConfig::MAX_PLAYERS);
            assert!((2..=6).contains(&state.visible_count));
            assert!(state.validate().is_ok(), "{action:?} broke {state:?}");
            if let Some(selected) = state.selected {
                assert!(state.is_visible(selected));
            }
            if matches!(action, Action::ResetGame) {
                assert_eq!(state.visible_count, visible_before);
            }
        }
    }
}
