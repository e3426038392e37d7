//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use tracker_core::GameConfig;

/// Directory name used under the platform data directory.
const APP_NAME: &str = "lifetracker";

/// Configuration required to bootstrap a session.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    pub enable_persistence: bool,
    pub save_data_dir: Option<PathBuf>,
    pub rng_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            enable_persistence: true,
            save_data_dir: None,
            rng_seed: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ENABLE_PERSISTENCE` - Save the table after every change (default: true)
    /// - `SAVE_DATA_DIR` - Directory for the snapshot (default: platform-specific)
    /// - `TRACKER_INITIAL_PLAYERS` - Seats shown in a fresh game, 2..=6 (default: 4)
    /// - `TRACKER_RNG_SEED` - Fixed seed for random player selection (default: entropy)
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Bare presence (`ENABLE_PERSISTENCE=`) counts as enabled
        if let Some(raw) = lookup("ENABLE_PERSISTENCE")
            && let Some(enable) = parse_flag(&raw)
        {
            config.enable_persistence = enable;
        }

        config.save_data_dir = lookup("SAVE_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        if let Some(count) = parse::<usize>(&lookup, "TRACKER_INITIAL_PLAYERS") {
            config.game = GameConfig::with_initial_visible_players(count);
        }

        config.rng_seed = parse::<u64>(&lookup, "TRACKER_RNG_SEED");

        config
    }

    /// Directory holding the snapshot document.
    ///
    /// Follows platform conventions when `SAVE_DATA_DIR` is unset:
    /// - macOS: `~/Library/Application Support/lifetracker`
    /// - Linux: `~/.local/share/lifetracker` (or `$XDG_DATA_HOME/lifetracker`)
    /// - Windows: `%APPDATA%\lifetracker`
    /// - Fallback: `./save_data`
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.save_data_dir {
            return dir.clone();
        }
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./save_data"))
    }

    /// Seed for the session RNG, drawing one from entropy when none is configured.
    pub fn seed(&self) -> u64 {
        self.rng_seed.unwrap_or_else(rand::random)
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
