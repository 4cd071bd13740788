//! Roster data shipped with the crate.
//!
//! The files under `data/` are embedded at compile time so the game runs
//! without a data directory; [`data_dir`] points at the same files on disk
//! for tools that want to read or override them.

use std::path::PathBuf;

use dle_core::{GameConfig, Roster, Variant};

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader};

const CLASH_ROYALE_CARDS: &str = include_str!("../data/clashroyale/cards.json");
const BRAWL_STARS_BRAWLERS: &str = include_str!("../data/brawlstars/brawlers.json");
const CONFIG: &str = include_str!("../data/config.toml");

/// Source directory of the bundled data.
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Raw roster JSON of `variant`.
pub const fn roster_json(variant: Variant) -> &'static str {
    match variant {
        Variant::ClashRoyale => CLASH_ROYALE_CARDS,
        Variant::BrawlStars => BRAWL_STARS_BRAWLERS,
    }
}

/// Parses the embedded roster of `variant`.
pub fn roster(variant: Variant) -> LoadResult<Roster> {
    RosterLoader::from_json_str(roster_json(variant), &variant.rules().id_key)
}

/// Parses the embedded game configuration.
pub fn config() -> LoadResult<GameConfig> {
    ConfigLoader::from_toml_str(CONFIG)
}
