//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use dle_core::{DayKey, Variant};

/// Configuration required to bootstrap a daily game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub variant: Variant,
    /// Directory holding roster files; bundled data when unset.
    pub data_dir: Option<PathBuf>,
    /// Directory for stats and daily progress; platform data dir when unset.
    pub save_dir: Option<PathBuf>,
    /// Persist today's progress and refuse replays after a win.
    pub daily_lock: bool,
    pub share_base_url: Option<String>,
    /// Overrides the local calendar day.
    pub date: Option<DayKey>,
}

impl ClientConfig {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DLE_VARIANT` - `clash-royale` or `brawl-stars` (default: clash-royale)
    /// - `DLE_DATA_DIR` - Directory containing roster files (default: bundled data)
    /// - `DLE_SAVE_DIR` - Directory for stats and progress (default: platform-specific)
    /// - `DLE_DAILY_LOCK` - Persist and restore today's game (default: false)
    /// - `DLE_SHARE_BASE_URL` - Base URL appended to share text (default: none)
    /// - `DLE_DATE` - Play a specific day, `YYYY-MM-DD` (default: today)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(variant) = read_var::<Variant>(&lookup, "DLE_VARIANT") {
            config.variant = variant;
        }

        config.data_dir = non_empty(lookup("DLE_DATA_DIR")).map(PathBuf::from);
        config.save_dir = non_empty(lookup("DLE_SAVE_DIR")).map(PathBuf::from);

        // Accept a bare `DLE_DAILY_LOCK=` as "on", like the other flags.
        if let Some(enable) = read_var::<bool>(&lookup, "DLE_DAILY_LOCK") {
            config.daily_lock = enable;
        } else if lookup("DLE_DAILY_LOCK").is_some() {
            config.daily_lock = true;
        }

        config.share_base_url = non_empty(lookup("DLE_SHARE_BASE_URL"));
        config.date = read_var::<DayKey>(&lookup, "DLE_DATE");

        config
    }

    /// The day to play: the override if set, otherwise today.
    pub fn day(&self) -> DayKey {
        self.date.unwrap_or_else(DayKey::today)
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
