//! Snapshot migration at the load boundary.
//!
//! [`migrate`] accepts whatever a persistence layer handed back and either
//! produces a valid current-schema [`GameState`] or reports why nothing could
//! be recovered, in which case the caller starts a fresh game.
//!
//! Migration only adds: missing newer fields are filled with their defaults,
//! existing values are kept. Applying it to its own output changes nothing.
//!
//! Schema history:
//! - v1: `id`, `life`, `color` (hex) per player; `visibleCount` may be absent
//! - v2: `colorIndex`, `commanderDamage`, `counters` per player;
//!   `commanderDamageSourceId`, `activeCounterType`, `activeCounterPlayerId`

use serde_json::{Map, Value};

use crate::config::GameConfig;
use crate::state::{GameState, PlayerId, PlayerState, SnapshotDocument, StateError};

/// Why a persisted value could not be turned into a [`GameState`].
///
/// Every variant means "no usable snapshot"; none of them is fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    #[error("snapshot is not a JSON object")]
    NotAnObject,

    #[error("snapshot has no numeric version")]
    MissingVersion,

    #[error("snapshot version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: String, supported: u32 },

    #[error("snapshot has no players array")]
    MissingPlayers,

    #[error("snapshot has {found} players, at least {min} required")]
    TooFewPlayers { found: usize, min: usize },

    #[error("snapshot has {found} players, at most {max} supported")]
    TooManyPlayers { found: usize, max: usize },

    #[error("malformed snapshot: {0}")]
    Malformed(String),

    #[error("invalid snapshot: {0}")]
    Invalid(#[from] StateError),
}

impl MigrationError {
    /// Stable code for logs.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotAnObject => "SNAPSHOT_NOT_AN_OBJECT",
            Self::MissingVersion => "SNAPSHOT_MISSING_VERSION",
            Self::UnsupportedVersion { .. } => "SNAPSHOT_UNSUPPORTED_VERSION",
            Self::MissingPlayers => "SNAPSHOT_MISSING_PLAYERS",
            Self::TooFewPlayers { .. } => "SNAPSHOT_TOO_FEW_PLAYERS",
            Self::TooManyPlayers { .. } => "SNAPSHOT_TOO_MANY_PLAYERS",
            Self::Malformed(_) => "SNAPSHOT_MALFORMED",
            Self::Invalid(_) => "SNAPSHOT_INVALID",
        }
    }
}

/// Migrates a persisted value of any known schema version to the current one.
pub fn migrate(raw: &Value) -> Result<GameState, MigrationError> {
    let object = raw.as_object().ok_or(MigrationError::NotAnObject)?;
    check_version(object)?;

    let players = object
        .get("players")
        .and_then(Value::as_array)
        .ok_or(MigrationError::MissingPlayers)?;
    if players.len() < GameConfig::MIN_PLAYERS {
        return Err(MigrationError::TooFewPlayers {
            found: players.len(),
            min: GameConfig::MIN_PLAYERS,
        });
    }
    if players.len() > GameConfig::MAX_PLAYERS {
        return Err(MigrationError::TooManyPlayers {
            found: players.len(),
            max: GameConfig::MAX_PLAYERS,
        });
    }

    let filled = fill_defaults(object, players)?;
    let document: SnapshotDocument = serde_json::from_value(Value::Object(filled))
        .map_err(|error| MigrationError::Malformed(error.to_string()))?;

    Ok(GameState::try_from(repair(document))?)
}

fn check_version(object: &Map<String, Value>) -> Result<(), MigrationError> {
    let version = object
        .get("version")
        .and_then(Value::as_number)
        .ok_or(MigrationError::MissingVersion)?;

    let too_new = match version.as_u64() {
        Some(integer) => integer > u64::from(GameConfig::SCHEMA_VERSION),
        None => version
            .as_f64()
            .is_some_and(|float| float > f64::from(GameConfig::SCHEMA_VERSION)),
    };
    if too_new {
        return Err(MigrationError::UnsupportedVersion {
            found: version.to_string(),
            supported: GameConfig::SCHEMA_VERSION,
        });
    }
    Ok(())
}

/// Forward-fills every field newer schemas introduced.
fn fill_defaults(
    object: &Map<String, Value>,
    players: &[Value],
) -> Result<Map<String, Value>, MigrationError> {
    let mut filled = object.clone();

    let visible = object
        .get("visibleCount")
        .and_then(Value::as_f64)
        .map(|count| count.clamp(0.0, GameConfig::MAX_PLAYERS as f64) as usize)
        .unwrap_or(players.len());
    filled.insert(
        "visibleCount".into(),
        Value::from(GameConfig::clamp_visible(visible)),
    );

    for key in [
        "selectedPlayerId",
        "commanderDamageSourceId",
        "activeCounterType",
        "activeCounterPlayerId",
    ] {
        filled.entry(key).or_insert(Value::Null);
    }

    let players = players
        .iter()
        .enumerate()
        .map(|(seat, player)| fill_player(seat, player))
        .collect::<Result<Vec<_>, _>>()?;
    filled.insert("players".into(), Value::Array(players));
    filled.insert("version".into(), Value::from(GameConfig::SCHEMA_VERSION));

    Ok(filled)
}

fn fill_player(seat: usize, player: &Value) -> Result<Value, MigrationError> {
    let mut player = player
        .as_object()
        .cloned()
        .ok_or_else(|| MigrationError::Malformed(format!("player at seat {seat} is not an object")))?;

    if !player.contains_key("colorIndex") {
        let index = player
            .get("color")
            .and_then(Value::as_str)
            .and_then(|hex| {
                GameConfig::PALETTE
                    .iter()
                    .position(|known| known.eq_ignore_ascii_case(hex))
            })
            .map(|index| index as u8)
            .unwrap_or_else(|| GameConfig::color_for_seat(seat));
        player.insert("colorIndex".into(), Value::from(index));
    }
    // An explicit null reads the same as an absent field.
    for key in ["commanderDamage", "counters"] {
        let slot = player.entry(key).or_insert(Value::Null);
        if slot.is_null() {
            *slot = Value::Object(Map::new());
        }
    }

    Ok(Value::Object(player))
}

/// Brings a decoded document back inside the table invariants without
/// touching any valid value.
fn repair(mut document: SnapshotDocument) -> SnapshotDocument {
    while document.players.len() < GameConfig::MAX_PLAYERS {
        let seat = document.players.len();
        let id = (0..=u8::MAX)
            .map(PlayerId)
            .find(|candidate| document.players.iter().all(|player| player.id != *candidate))
            .unwrap_or(PlayerId::for_seat(seat));
        document.players.push(PlayerState {
            id,
            ..PlayerState::for_seat(seat)
        });
    }

    for (seat, player) in document.players.iter_mut().enumerate() {
        if usize::from(player.color_index) >= GameConfig::PALETTE.len() {
            player.color_index = GameConfig::color_for_seat(seat);
        }
    }

    let visible = document.visible_count;
    let is_visible = |document: &SnapshotDocument, id: PlayerId| {
        document.players[..visible]
            .iter()
            .any(|player| player.id == id)
    };

    if let Some(selected) = document.selected_player_id
        && !is_visible(&document, selected)
    {
        document.selected_player_id = None;
    }

    // Half-set counter mode, both modes at once, or a mode pointing at a
    // hidden seat all collapse to no mode.
    let keep_modal = match document.modal() {
        Ok(modal) => modal.player().is_none_or(|id| is_visible(&document, id)),
        Err(_) => false,
    };
    if !keep_modal {
        document.commander_damage_source_id = None;
        document.active_counter_type = None;
        document.active_counter_player_id = None;
    }

    document
}
