//! Builds the daily game from configuration, content and stores.
use std::sync::Arc;

use anyhow::{Context, Result};
use dle_core::{GameSession, ProgressStore, StatsStore};

use crate::config::ClientConfig;
use crate::dirs;
use crate::game::DailyGame;
use crate::source::{BundledSource, DirectorySource, RosterSource};
use crate::store::{FileProgressStore, FileStatsStore};

/// Builder that assembles the roster, session and stores for a client.
pub struct GameBuilder {
    config: ClientConfig,
    source: Arc<dyn RosterSource>,
    stats_store: Option<Arc<dyn StatsStore>>,
    progress_store: Option<Arc<dyn ProgressStore>>,
}

impl GameBuilder {
    /// Starts from `config`; rosters come from `DLE_DATA_DIR` when set and
    /// from the bundled data otherwise.
    pub fn new(config: ClientConfig) -> Self {
        let source: Arc<dyn RosterSource> = match &config.data_dir {
            Some(dir) => Arc::new(DirectorySource::new(dir.clone())),
            None => Arc::new(BundledSource),
        };
        Self {
            config,
            source,
            stats_store: None,
            progress_store: None,
        }
    }

    /// Provide a custom roster source.
    pub fn roster_source(mut self, source: impl RosterSource + 'static) -> Self {
        self.source = Arc::new(source);
        self
    }

    /// Provide a custom stats store (e.g. in-memory for tests).
    pub fn stats_store(mut self, store: Arc<dyn StatsStore>) -> Self {
        self.stats_store = Some(store);
        self
    }

    /// Provide a custom progress store.
    pub fn progress_store(mut self, store: Arc<dyn ProgressStore>) -> Self {
        self.progress_store = Some(store);
        self
    }

    pub fn build(self) -> Result<DailyGame> {
        let variant = self.config.variant;
        let day = self.config.day();

        let roster = self
            .source
            .load_roster(variant)
            .with_context(|| format!("Failed to load {variant} roster"))?;
        let game_config = self
            .source
            .load_config()
            .context("Failed to load game config")?;

        tracing::info!(
            %variant,
            source = %self.source.describe(),
            entities = roster.len(),
            "Roster loaded"
        );

        let session = GameSession::start(variant, Arc::new(roster), day, game_config);
        tracing::debug!(
            %variant,
            %day,
            puzzle = day.puzzle_number(),
            "Daily target selected"
        );

        let save_dir = self.config.save_dir.clone().unwrap_or_else(dirs::data_dir);
        let stats_store: Arc<dyn StatsStore> = match self.stats_store {
            Some(store) => store,
            None => Arc::new(
                FileStatsStore::new(&save_dir)
                    .with_context(|| format!("Failed to open save dir {}", save_dir.display()))?,
            ),
        };
        let progress_store: Arc<dyn ProgressStore> = match self.progress_store {
            Some(store) => store,
            None => Arc::new(
                FileProgressStore::new(&save_dir)
                    .with_context(|| format!("Failed to open save dir {}", save_dir.display()))?,
            ),
        };

        Ok(DailyGame::new(
            session,
            stats_store,
            progress_store,
            self.config.daily_lock,
            self.config.share_base_url,
        ))
    }
}
