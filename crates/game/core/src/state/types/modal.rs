use super::{CounterKind, PlayerId};

/// The single slot that redirects increment gestures away from life totals.
///
/// At most one mode exists at a time: entering either variant replaces
/// whatever was there before.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModalTarget {
    #[default]
    None,
    /// Increments record commander damage dealt by this player.
    CommanderSource(PlayerId),
    /// Increments adjust one counter on one player.
    CounterTarget { kind: CounterKind, player: PlayerId },
}

impl ModalTarget {
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub const fn commander_source(&self) -> Option<PlayerId> {
        match self {
            Self::CommanderSource(source) => Some(*source),
            _ => None,
        }
    }

    pub const fn counter_target(&self) -> Option<(CounterKind, PlayerId)> {
        match self {
            Self::CounterTarget { kind, player } => Some((*kind, *player)),
            _ => None,
        }
    }

    /// Player the mode points at, whichever variant is active.
    pub const fn player(&self) -> Option<PlayerId> {
        match self {
            Self::None => None,
            Self::CommanderSource(player) | Self::CounterTarget { player, .. } => Some(*player),
        }
    }

    /// Switches commander mode for `source`: the same source turns the mode
    /// off, anything else becomes the new source.
    pub fn toggled_commander(self, source: PlayerId) -> Self {
        match self {
            Self::CommanderSource(current) if current == source => Self::None,
            _ => Self::CommanderSource(source),
        }
    }

    /// Switches counter mode for `(kind, player)`: the exact active pair turns
    /// the mode off, any other pair replaces it.
    pub fn toggled_counter(self, kind: CounterKind, player: PlayerId) -> Self {
        match self {
            Self::CounterTarget {
                kind: current_kind,
                player: current_player,
            } if current_kind == kind && current_player == player => Self::None,
            _ => Self::CounterTarget { kind, player },
        }
    }
}
