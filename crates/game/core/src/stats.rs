//! Player statistics for daily mode.

use std::collections::{BTreeMap, BTreeSet};

use crate::daily::DayKey;

/// Lifetime statistics for one variant.
///
/// `played` counts distinct days with at least one guess and `wins` counts
/// distinct days with a win, so `wins <= played` always holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Stats {
    pub played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Number of wins per guess count.
    pub guess_distribution: BTreeMap<u32, u32>,
    pub attempted_days: BTreeSet<DayKey>,
    pub last_win_day: Option<DayKey>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the first guess of `day`. Returns `true` if `played` changed.
    pub fn mark_attempt(&mut self, day: DayKey) -> bool {
        if !self.attempted_days.insert(day) {
            return false;
        }
        self.played += 1;
        true
    }

    /// Records a win on `day` after `guesses` guesses.
    ///
    /// Idempotent per day: a second call for the same day changes nothing and
    /// returns `false`. The streak continues only when the previous win was
    /// the day before.
    pub fn record_win(&mut self, guesses: u32, day: DayKey) -> bool {
        if self.last_win_day == Some(day) {
            return false;
        }

        self.mark_attempt(day);
        self.wins += 1;

        self.current_streak = match (self.last_win_day, day.previous()) {
            (Some(last), Some(yesterday)) if last == yesterday => self.current_streak + 1,
            _ => 1,
        };
        self.max_streak = self.max_streak.max(self.current_streak);
        self.last_win_day = Some(day);

        *self.guess_distribution.entry(guesses).or_default() += 1;
        true
    }

    /// Rounded win rate in percent; 0 before any game.
    pub fn win_percentage(&self) -> u32 {
        if self.played == 0 {
            return 0;
        }
        let wins = u64::from(self.wins) * 100;
        let played = u64::from(self.played);
        // Round half up, and the result is at most 100.
        ((wins + played / 2) / played) as u32
    }

    /// Largest bucket of the distribution, for scaling bar charts.
    pub fn max_bucket(&self) -> u32 {
        self.guess_distribution.values().copied().max().unwrap_or(0)
    }
}
