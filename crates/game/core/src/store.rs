//! Persistence contracts for stats and daily progress.
//!
//! Implementations live outside the core (file-backed stores in the client
//! bootstrap); the in-memory versions here back tests and ephemeral runs.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::daily::DayKey;
use crate::error::{ErrorSeverity, GameError};
use crate::rules::Variant;
use crate::session::Progress;
use crate::stats::Stats;

/// Errors surfaced by store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl GameError for StoreError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "STORE_LOCK_POISONED",
            Self::Io(_) => "STORE_IO",
            Self::Serialization(_) => "STORE_SERIALIZATION",
            Self::CorruptedData(_) => "STORE_CORRUPTED",
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Per-variant lifetime statistics.
pub trait StatsStore: Send + Sync {
    /// Loads stats, returning defaults when nothing was saved yet.
    fn load(&self, variant: Variant) -> Result<Stats>;

    fn save(&self, variant: Variant, stats: &Stats) -> Result<()>;
}

/// Per-variant, per-day saved progress.
pub trait ProgressStore: Send + Sync {
    fn load(&self, variant: Variant, day: DayKey) -> Result<Option<Progress>>;

    fn save(&self, progress: &Progress) -> Result<()>;

    /// Removes the entry for `day`; absent entries are not an error.
    fn clear(&self, variant: Variant, day: DayKey) -> Result<()>;
}

/// In-memory [`StatsStore`].
#[derive(Debug, Default)]
pub struct InMemoryStatsStore {
    stats: RwLock<HashMap<Variant, Stats>>,
}

impl InMemoryStatsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsStore for InMemoryStatsStore {
    fn load(&self, variant: Variant) -> Result<Stats> {
        let stats = self.stats.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(stats.get(&variant).cloned().unwrap_or_default())
    }

    fn save(&self, variant: Variant, stats: &Stats) -> Result<()> {
        let mut all = self.stats.write().map_err(|_| StoreError::LockPoisoned)?;
        all.insert(variant, stats.clone());
        Ok(())
    }
}

/// In-memory [`ProgressStore`].
#[derive(Debug, Default)]
pub struct InMemoryProgressStore {
    entries: RwLock<HashMap<(Variant, DayKey), Progress>>,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for InMemoryProgressStore {
    fn load(&self, variant: Variant, day: DayKey) -> Result<Option<Progress>> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(&(variant, day)).cloned())
    }

    fn save(&self, progress: &Progress) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        entries.insert((progress.variant, progress.day), progress.clone());
        Ok(())
    }

    fn clear(&self, variant: Variant, day: DayKey) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        entries.remove(&(variant, day));
        Ok(())
    }
}
