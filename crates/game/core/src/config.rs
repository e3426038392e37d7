/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of seats shown when a fresh game is created.
    pub initial_visible_players: usize,
}

impl GameConfig {
    // ===== fixed table geometry =====
    /// Fewest seats that may be visible at once.
    pub const MIN_PLAYERS: usize = 2;
    /// Seats allocated in every snapshot. Hidden seats keep their data.
    pub const MAX_PLAYERS: usize = 6;

    // ===== game rules =====
    pub const STARTING_LIFE: i32 = 40;

    /// Current schema tag stamped on every snapshot.
    ///
    /// - `1`: life totals and selection only
    /// - `2`: commander damage, status counters, modal increment target
    pub const SCHEMA_VERSION: u32 = 2;

    /// Seat colours, indexed by `PlayerState::color_index`.
    pub const PALETTE: [&'static str; 6] = [
        "#e74c3c", // red
        "#3498db", // blue
        "#2ecc71", // green
        "#f39c12", // amber
        "#9b59b6", // purple
        "#1abc9c", // teal
    ];

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_VISIBLE_PLAYERS: usize = 4;

    pub fn new() -> Self {
        Self {
            initial_visible_players: Self::DEFAULT_VISIBLE_PLAYERS,
        }
    }

    /// Builds a config with the given fresh-game seat count, clamped to the
    /// allowed range.
    pub fn with_initial_visible_players(count: usize) -> Self {
        Self {
            initial_visible_players: Self::clamp_visible(count),
        }
    }

    /// Clamps a visible-seat count into `[MIN_PLAYERS, MAX_PLAYERS]`.
    pub const fn clamp_visible(count: usize) -> usize {
        if count < Self::MIN_PLAYERS {
            Self::MIN_PLAYERS
        } else if count > Self::MAX_PLAYERS {
            Self::MAX_PLAYERS
        } else {
            count
        }
    }

    /// Maps a seat index onto a palette slot.
    pub const fn color_for_seat(seat: usize) -> u8 {
        (seat % Self::PALETTE.len()) as u8
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_initial_visible_players() {
        assert_eq!(GameConfig::with_initial_visible_players(0).initial_visible_players, 2);
        assert_eq!(GameConfig::with_initial_visible_players(5).initial_visible_players, 5);
        assert_eq!(GameConfig::with_initial_visible_players(9).initial_visible_players, 6);
    }

    #[test]
    fn seat_colors_wrap_around_palette() {
        assert_eq!(GameConfig::color_for_seat(0), 0);
        assert_eq!(GameConfig::color_for_seat(5), 5);
        assert_eq!(GameConfig::color_for_seat(7), 1);
    }
}
