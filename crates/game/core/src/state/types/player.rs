use std::collections::BTreeMap;

use super::PlayerId;
use crate::config::GameConfig;

/// One of the four per-player status tallies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CounterKind {
    Poison,
    Radiation,
    Energy,
    CommanderCasts,
}

/// Fixed record of status counters. Every value is non-negative by type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Counters {
    pub poison: u32,
    pub radiation: u32,
    pub energy: u32,
    pub commander_casts: u32,
}

impl Counters {
    pub const fn get(&self, kind: CounterKind) -> u32 {
        match kind {
            CounterKind::Poison => self.poison,
            CounterKind::Radiation => self.radiation,
            CounterKind::Energy => self.energy,
            CounterKind::CommanderCasts => self.commander_casts,
        }
    }

    pub fn get_mut(&mut self, kind: CounterKind) -> &mut u32 {
        match kind {
            CounterKind::Poison => &mut self.poison,
            CounterKind::Radiation => &mut self.radiation,
            CounterKind::Energy => &mut self.energy,
            CounterKind::CommanderCasts => &mut self.commander_casts,
        }
    }

    /// Adds `delta` to one counter, flooring at zero. Returns the new value.
    pub fn adjust(&mut self, kind: CounterKind, delta: i32) -> u32 {
        let slot = self.get_mut(kind);
        *slot = floor_add(*slot, delta);
        *slot
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Adds a signed delta to a tally, clamping into `[0, u32::MAX]`.
#[inline]
pub(crate) fn floor_add(current: u32, delta: i32) -> u32 {
    (i64::from(current) + i64::from(delta)).clamp(0, i64::from(u32::MAX)) as u32
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PlayerState {
    pub id: PlayerId,

    /// Life total. Unbounded in both directions.
    pub life: i32,

    /// Palette slot, cosmetic only.
    pub color_index: u8,

    /// Damage received, keyed by the dealing player. Absent means zero.
    #[cfg_attr(feature = "serde", serde(default))]
    pub commander_damage: BTreeMap<PlayerId, u32>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub counters: Counters,
}

impl PlayerState {
    /// Fresh seat at `index` with starting life and no damage or counters.
    pub fn for_seat(index: usize) -> Self {
        Self {
            id: PlayerId::for_seat(index),
            life: GameConfig::STARTING_LIFE,
            color_index: GameConfig::color_for_seat(index),
            commander_damage: BTreeMap::new(),
            counters: Counters::default(),
        }
    }

    /// Commander damage received from `source`.
    pub fn commander_damage_from(&self, source: PlayerId) -> u32 {
        self.commander_damage.get(&source).copied().unwrap_or(0)
    }

    /// Adds `delta` to the damage received from `source`, flooring at zero.
    ///
    /// Entries that land on zero are dropped so the map stays sparse.
    pub fn adjust_commander_damage(&mut self, source: PlayerId, delta: i32) -> u32 {
        let next = floor_add(self.commander_damage_from(source), delta);
        if next == 0 {
            self.commander_damage.remove(&source);
        } else {
            self.commander_damage.insert(source, next);
        }
        next
    }

    pub fn adjust_life(&mut self, delta: i32) -> i32 {
        self.life = self.life.saturating_add(delta);
        self.life
    }

    /// Zeroes every mutable game field, keeping identity and colour.
    pub fn reset(&mut self) {
        self.life = GameConfig::STARTING_LIFE;
        self.commander_damage.clear();
        self.counters = Counters::default();
    }

    /// Palette colour for this seat.
    pub fn color(&self) -> &'static str {
        GameConfig::PALETTE[usize::from(self.color_index) % GameConfig::PALETTE.len()]
    }
}
