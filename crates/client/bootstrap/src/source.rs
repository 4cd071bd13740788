//! Where rosters and game parameters come from.
use std::path::PathBuf;

use anyhow::Result;
use dle_content::{ContentFactory, bundled};
use dle_core::{GameConfig, Roster, Variant};

pub trait RosterSource: Send + Sync {
    fn load_roster(&self, variant: Variant) -> Result<Roster>;

    fn load_config(&self) -> Result<GameConfig> {
        Ok(GameConfig::default())
    }

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// Rosters compiled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct BundledSource;

impl RosterSource for BundledSource {
    fn load_roster(&self, variant: Variant) -> Result<Roster> {
        bundled::roster(variant)
    }

    fn load_config(&self) -> Result<GameConfig> {
        bundled::config()
    }

    fn describe(&self) -> String {
        "bundled data".to_owned()
    }
}

/// Rosters read from a data directory at startup.
///
/// The directory follows the [`ContentFactory`] layout; `config.toml` is
/// optional.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    factory: ContentFactory,
}

impl DirectorySource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            factory: ContentFactory::new(data_dir),
        }
    }
}

impl RosterSource for DirectorySource {
    fn load_roster(&self, variant: Variant) -> Result<Roster> {
        self.factory.load_roster(variant)
    }

    fn load_config(&self) -> Result<GameConfig> {
        self.factory.load_config()
    }

    fn describe(&self) -> String {
        self.factory.data_dir().display().to_string()
    }
}
