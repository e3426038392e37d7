//! Restoring the table snapshot at startup.

use tracker_core::{GameConfig, GameState, migrate};

use super::StateRepository;

/// Load the stored snapshot, migrate it, and fall back to a fresh game.
///
/// Nothing that goes wrong here is fatal: an unreadable store, a missing
/// document, or a document that fails migration all produce
/// `GameState::from_config(config)`.
pub fn load_or_default<R>(repo: &R, config: &GameConfig) -> GameState
where
    R: StateRepository + ?Sized,
{
    let raw = match repo.load() {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("No stored snapshot, starting a fresh game");
            return GameState::from_config(config);
        }
        Err(error) => {
            tracing::warn!("Failed to read stored snapshot: {}. Starting a fresh game.", error);
            return GameState::from_config(config);
        }
    };

    match migrate(&raw) {
        Ok(state) => {
            tracing::info!(
                visible = state.visible_count,
                "Restored stored snapshot"
            );
            state
        }
        Err(error) => {
            tracing::warn!(
                code = error.error_code(),
                "Stored snapshot rejected: {}. Starting a fresh game.",
                error
            );
            GameState::from_config(config)
        }
    }
}
