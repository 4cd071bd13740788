//! Saved daily progress.
//!
//! Progress stores identifiers only. Comparisons are recomputed on restore,
//! which is safe because the engine is deterministic.

use crate::daily::DayKey;
use crate::rules::Variant;

/// Snapshot of one day's session, as written by a
/// [`ProgressStore`](crate::store::ProgressStore).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    pub variant: Variant,
    pub day: DayKey,
    /// Identifier of the day's target; progress for another target is stale.
    pub target: String,
    pub solved: bool,
    /// Guessed identifiers, oldest first.
    pub guesses: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub revealed_hints: Vec<String>,
}

/// Result of applying saved progress to a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Saved for another day, variant or target; the session is unchanged.
    Stale,
    Restored {
        replayed: usize,
        /// Saved identifiers no longer present in the roster.
        skipped: Vec<String>,
        /// The progress was marked solved but lacked the winning guess, so it
        /// was appended.
        synthesized_win: bool,
    },
}
