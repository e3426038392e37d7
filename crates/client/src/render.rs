//! Plain-text table view.

use std::fmt::Write;

use strum::IntoEnumIterator;
use tracker_core::{CounterKind, GameState, ModalTarget, PlayerState};

/// One line per visible seat, followed by the active entry mode if any.
pub fn render(state: &GameState) -> String {
    let mut out = String::new();
    for player in state.visible_players() {
        let _ = writeln!(out, "{}", seat_line(state, player));
    }
    match state.modal {
        ModalTarget::None => {}
        ModalTarget::CommanderSource(source) => {
            let _ = writeln!(out, "-- entering commander damage dealt by {source}");
        }
        ModalTarget::CounterTarget { kind, player } => {
            let _ = writeln!(out, "-- entering {kind} counters for {player}");
        }
    }
    out
}

fn seat_line(state: &GameState, player: &PlayerState) -> String {
    let marker = if state.selected == Some(player.id) {
        '*'
    } else if state.modal.player() == Some(player.id) {
        '>'
    } else {
        ' '
    };

    let mut line = format!("{marker} {:<3} {:>4}", player.id.to_string(), player.life);

    let counters: Vec<String> = CounterKind::iter()
        .filter_map(|kind| {
            let value = player.counters.get(kind);
            (value > 0).then(|| format!("{kind} {value}"))
        })
        .collect();
    if !counters.is_empty() {
        let _ = write!(line, "  [{}]", counters.join(", "));
    }

    if !player.commander_damage.is_empty() {
        let damage: Vec<String> = player
            .commander_damage
            .iter()
            .map(|(source, amount)| format!("{source}={amount}"))
            .collect();
        let _ = write!(line, "  cmd {}", damage.join(" "));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::PlayerId;

    #[test]
    fn renders_visible_seats_only() {
        let view = render(&GameState::new(3));
        assert_eq!(view.lines().count(), 3);
        assert!(view.contains("p2"));
        assert!(!view.contains("p3"));
    }

    #[test]
    fn marks_selection_counters_and_damage() {
        let mut state = GameState::default();
        state.selected = Some(PlayerId(1));
        state.players[0].counters.poison = 2;
        state.players[0].adjust_commander_damage(PlayerId(3), 6);
        state.modal = ModalTarget::CounterTarget {
            kind: CounterKind::Energy,
            player: PlayerId(2),
        };

        let view = render(&state);
        let lines: Vec<&str> = view.lines().collect();
        assert!(lines[0].contains("[poison 2]"));
        assert!(lines[0].contains("cmd p3=6"));
        assert!(lines[1].starts_with('*'));
        assert!(lines[2].starts_with('>'));
        assert_eq!(lines[4], "-- entering energy counters for p2");
    }
}
