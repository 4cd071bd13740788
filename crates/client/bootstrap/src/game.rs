//! A day's game wired to its stores.
//!
//! [`DailyGame`] wraps a [`GameSession`] and keeps stats and (with the daily
//! lock on) saved progress in step with it. Store failures are logged and
//! never interrupt play.
use std::sync::Arc;

use anyhow::{Result, bail};
use dle_core::{
    Countdown, DayKey, GameSession, GuessError, GuessRecord, HintError, ProgressStore,
    RestoreOutcome, Stats, StatsStore, Variant, share_text,
};

pub struct DailyGame {
    session: GameSession,
    stats: Stats,
    stats_store: Arc<dyn StatsStore>,
    progress_store: Arc<dyn ProgressStore>,
    daily_lock: bool,
    share_base_url: Option<String>,
}

impl DailyGame {
    pub(crate) fn new(
        session: GameSession,
        stats_store: Arc<dyn StatsStore>,
        progress_store: Arc<dyn ProgressStore>,
        daily_lock: bool,
        share_base_url: Option<String>,
    ) -> Self {
        let variant = session.variant();
        let stats = stats_store.load(variant).unwrap_or_else(|error| {
            tracing::warn!(%variant, %error, "Failed to load stats; starting from empty stats");
            Stats::default()
        });

        let mut game = Self {
            session,
            stats,
            stats_store,
            progress_store,
            daily_lock,
            share_base_url,
        };
        game.resume();
        game
    }

    /// Restores today's progress when locked, or drops it when not.
    fn resume(&mut self) {
        let variant = self.variant();
        let day = self.day();

        if !self.daily_lock {
            if let Err(error) = self.progress_store.clear(variant, day) {
                tracing::warn!(%variant, %day, %error, "Failed to clear stale progress");
            }
            return;
        }

        let progress = match self.progress_store.load(variant, day) {
            Ok(Some(progress)) => progress,
            Ok(None) => return,
            Err(error) => {
                tracing::warn!(%variant, %day, %error, "Ignoring unreadable saved progress");
                return;
            }
        };

        match self.session.restore(&progress) {
            RestoreOutcome::Stale => {
                tracing::info!(%variant, %day, "Saved progress is for another target; starting fresh");
            }
            RestoreOutcome::Restored {
                replayed,
                skipped,
                synthesized_win,
            } => {
                if !skipped.is_empty() {
                    tracing::warn!(?skipped, "Saved guesses no longer in the roster");
                }
                if synthesized_win {
                    tracing::debug!("Re-created the winning row of a solved game");
                }
                for record in self.session.guesses() {
                    warn_missing(variant, record);
                }
                tracing::info!(%variant, %day, replayed, "Restored saved progress");
            }
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn variant(&self) -> Variant {
        self.session.variant()
    }

    pub fn day(&self) -> DayKey {
        self.session.day()
    }

    pub fn is_locked(&self) -> bool {
        self.daily_lock
    }

    /// Submits a guess, updating stats and saved progress.
    pub fn submit(&mut self, input: &str) -> Result<&GuessRecord, GuessError> {
        let first_guess = self.session.guess_count() == 0;
        let day = self.day();

        let variant = self.variant();
        let record = self.session.submit(input)?;
        warn_missing(variant, record);
        let solved = record.is_solution();

        let mut stats_changed = first_guess && self.stats.mark_attempt(day);
        if solved {
            // The guess count fits in u32 for any real roster.
            let guesses = u32::try_from(self.session.guess_count()).unwrap_or(u32::MAX);
            stats_changed |= self.stats.record_win(guesses, day);
            tracing::info!(%variant, %day, guesses, "Puzzle solved");
        }
        if stats_changed {
            self.save_stats();
        }
        self.save_progress();

        // `submit` succeeded, so the history is non-empty.
        let last = self.session.guess_count() - 1;
        Ok(&self.session.guesses()[last])
    }

    pub fn reveal_hint(&mut self, key: &str) -> Result<String, HintError> {
        let text = self.session.reveal_hint(key)?;
        tracing::debug!(hint = key, guesses = self.session.guess_count(), "Hint revealed");
        self.save_progress();
        Ok(text)
    }

    /// Starts today's game over. Refused when the lock is on and the game
    /// is solved.
    pub fn reset(&mut self) -> Result<()> {
        if self.daily_lock && self.session.is_solved() {
            bail!("today's puzzle is already solved; come back tomorrow");
        }

        self.session.reset();
        if let Err(error) = self.progress_store.clear(self.variant(), self.day()) {
            tracing::warn!(%error, "Failed to clear saved progress");
        }
        tracing::info!(variant = %self.variant(), day = %self.day(), "Game reset");
        Ok(())
    }

    pub fn share_text(&self) -> String {
        share_text(&self.session, self.share_base_url.as_deref())
    }

    pub fn countdown(&self) -> Countdown {
        Countdown::now()
    }

    fn save_stats(&self) {
        if let Err(error) = self.stats_store.save(self.variant(), &self.stats) {
            tracing::warn!(%error, "Failed to save stats");
        }
    }

    fn save_progress(&self) {
        if !self.daily_lock {
            return;
        }
        if let Err(error) = self.progress_store.save(&self.session.progress()) {
            tracing::warn!(%error, "Failed to save progress");
        }
    }
}

/// Logs target attributes the guessed roster entry does not carry.
fn warn_missing(variant: Variant, record: &GuessRecord) {
    let missing = record.comparison().missing_keys();
    if !missing.is_empty() {
        tracing::warn!(
            %variant,
            guess = %record.entity().id(),
            ?missing,
            "Roster entry lacks attributes present on the target"
        );
    }
}
