//! Platform-specific directory utilities
//!
//! Provides consistent directory paths across different operating systems,
//! following platform conventions for cache and data directories.

use std::path::PathBuf;

const APP_NAME: &str = "dle";

/// Get the platform-specific log directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/dle/logs`
/// - Linux: `~/.cache/dle/logs` (or `$XDG_CACHE_HOME/dle/logs`)
/// - Windows: `%LOCALAPPDATA%\dle\logs`
/// - Fallback: `/tmp/dle/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp").join(APP_NAME));

    base_dir.join("logs")
}

/// Get the platform-specific data directory for stats and daily progress
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/dle`
/// - Linux: `~/.local/share/dle` (or `$XDG_DATA_HOME/dle`)
/// - Windows: `%APPDATA%\dle`
/// - Fallback: `./save_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}
