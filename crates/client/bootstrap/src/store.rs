//! File-based stats and daily-progress stores.
//!
//! Both stores write JSON through a temp file followed by a rename, so a
//! crash mid-write never leaves a truncated file behind.
//!
//! # Layout
//!
//! ```text
//! save_dir/
//! ├── stats-clash-royale.json
//! ├── stats-brawl-stars.json
//! └── progress/
//!     └── brawl-stars/
//!         └── 2025-01-01.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use dle_core::store::Result;
use dle_core::{DayKey, Progress, ProgressStore, Stats, StatsStore, StoreError, Variant};
use serde::Serialize;

/// File-based implementation of [`StatsStore`].
///
/// A missing file loads as empty stats. So does an unreadable one: the
/// player keeps playing and the next win overwrites it.
pub struct FileStatsStore {
    base_dir: PathBuf,
}

impl FileStatsStore {
    /// Create a new file-based stats store, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn stats_path(&self, variant: Variant) -> PathBuf {
        self.base_dir.join(format!("stats-{variant}.json"))
    }
}

impl StatsStore for FileStatsStore {
    fn load(&self, variant: Variant) -> Result<Stats> {
        let path = self.stats_path(variant);

        if !path.exists() {
            return Ok(Stats::default());
        }

        let bytes = fs::read(&path)?;
        match serde_json::from_slice::<Stats>(&bytes) {
            Ok(stats) => {
                tracing::debug!("Loaded {} stats from {}", variant, path.display());
                Ok(stats)
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Stats file is unreadable; starting from empty stats"
                );
                Ok(Stats::default())
            }
        }
    }

    fn save(&self, variant: Variant, stats: &Stats) -> Result<()> {
        let path = self.stats_path(variant);
        write_json(&path, stats)?;
        tracing::debug!("Saved {} stats to {}", variant, path.display());
        Ok(())
    }
}

/// File-based implementation of [`ProgressStore`], one file per day.
pub struct FileProgressStore {
    base_dir: PathBuf,
}

impl FileProgressStore {
    /// Create a new file-based progress store rooted at `base_dir/progress`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().join("progress");
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn progress_path(&self, variant: Variant, day: DayKey) -> PathBuf {
        self.base_dir
            .join(variant.as_ref())
            .join(format!("{day}.json"))
    }
}

impl ProgressStore for FileProgressStore {
    fn load(&self, variant: Variant, day: DayKey) -> Result<Option<Progress>> {
        let path = self.progress_path(variant, day);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let progress: Progress = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        if progress.variant != variant || progress.day != day {
            return Err(StoreError::CorruptedData(format!(
                "{} holds progress for {} on {}",
                path.display(),
                progress.variant,
                progress.day
            )));
        }

        tracing::debug!("Loaded {} progress for {} from {}", variant, day, path.display());

        Ok(Some(progress))
    }

    fn save(&self, progress: &Progress) -> Result<()> {
        let path = self.progress_path(progress.variant, progress.day);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_json(&path, progress)?;
        tracing::debug!(
            "Saved {} progress for {} to {}",
            progress.variant,
            progress.day,
            path.display()
        );
        Ok(())
    }

    fn clear(&self, variant: Variant, day: DayKey) -> Result<()> {
        let path = self.progress_path(variant, day);

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Cleared {} progress for {}", variant, day);
        }

        Ok(())
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    let bytes =
        serde_json::to_vec_pretty(value).map_err(|e| StoreError::Serialization(e.to_string()))?;

    // Write to temp file
    fs::write(&temp_path, bytes)?;

    // Atomic rename
    fs::rename(&temp_path, path)?;

    Ok(())
}
