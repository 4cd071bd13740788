//! Game configuration loader.

use std::path::Path;

use dle_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse config data, raising a zero suggestion limit to one.
    pub fn from_toml_str(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let limit = config.suggestion_limit;
        Ok(config.with_suggestion_limit(limit))
    }
}
