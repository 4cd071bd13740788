//! Content factory for loading every variant's data from one directory.

use std::path::{Path, PathBuf};

use dle_core::{GameConfig, Roster, RuleTable, Variant};

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader};

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml            (optional)
/// ├── clashroyale/
/// │   └── cards.json
/// └── brawlstars/
///     └── brawlers.json
/// ```
#[derive(Clone, Debug)]
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(crate::bundled::data_dir())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn roster_path(&self, variant: Variant) -> PathBuf {
        self.data_dir.join(variant.roster_file())
    }

    /// Load the roster of `variant` using its built-in rule table.
    pub fn load_roster(&self, variant: Variant) -> LoadResult<Roster> {
        self.load_roster_with(variant, &variant.rules())
    }

    /// Load the roster of `variant`, reading identifiers through `rules`.
    pub fn load_roster_with(&self, variant: Variant, rules: &RuleTable) -> LoadResult<Roster> {
        RosterLoader::load(&self.roster_path(variant), rules)
    }

    /// Load game configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn missing_roster_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        let err = factory.load_roster(Variant::BrawlStars).unwrap_err();
        assert!(format!("{err:#}").contains("brawlers.json"));
    }

    #[test]
    fn loads_rosters_from_variant_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("clashroyale")).unwrap();
        std::fs::write(
            dir.path().join("clashroyale/cards.json"),
            r#"[{"card": "Knight", "cost": 3}, {"card": "Archers", "cost": 3}]"#,
        )
        .unwrap();

        let roster = ContentFactory::new(dir.path())
            .load_roster(Variant::ClashRoyale)
            .unwrap();
        assert_eq!(roster.len(), 2);
        assert!(roster.get("Archers").is_some());
    }
}
