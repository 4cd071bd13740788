//! One player's session against the daily target.
//!
//! The session owns the day's target (fixed at start), the guess history in
//! chronological order, revealed hints and the solved flag. Presentation code
//! that wants newest-first rows uses [`GameSession::guesses_newest_first`].
mod hints;
mod progress;

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

pub use hints::{HintError, HintStatus};
pub use progress::{Progress, RestoreOutcome};

use crate::compare::{Comparison, compare};
use crate::config::GameConfig;
use crate::daily::{DayKey, select_daily};
use crate::entity::{Entity, Roster};
use crate::error::{ErrorSeverity, GameError};
use crate::rules::{HintDef, RuleTable, Variant};

/// A submitted guess and its verdicts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessRecord {
    entity: Entity,
    comparison: Comparison,
    solved: bool,
}

impl GuessRecord {
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    /// True when this guess was the target.
    pub fn is_solution(&self) -> bool {
        self.solved
    }
}

/// Errors returned when submitting a guess. State is unchanged on error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("no roster entry named `{0}`")]
    UnknownEntity(String),

    #[error("`{0}` was already guessed")]
    AlreadyGuessed(String),

    #[error("the puzzle is already solved")]
    AlreadySolved,
}

impl GameError for GuessError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownEntity(_) => "GUESS_UNKNOWN_ENTITY",
            Self::AlreadyGuessed(_) => "GUESS_DUPLICATE",
            Self::AlreadySolved => "GUESS_ALREADY_SOLVED",
        }
    }
}

/// Game state for one variant on one day.
#[derive(Clone, Debug)]
pub struct GameSession {
    variant: Variant,
    rules: RuleTable,
    config: GameConfig,
    roster: Arc<Roster>,
    day: DayKey,
    target: Entity,
    guesses: Vec<GuessRecord>,
    guessed: HashSet<String>,
    revealed: BTreeSet<&'static str>,
}

impl GameSession {
    /// Starts a session for `day`, selecting the target from `roster`.
    pub fn start(variant: Variant, roster: Arc<Roster>, day: DayKey, config: GameConfig) -> Self {
        let target = select_daily(&roster, day).clone();
        Self {
            variant,
            rules: variant.rules(),
            config,
            roster,
            day,
            target,
            guesses: Vec::new(),
            guessed: HashSet::new(),
            revealed: BTreeSet::new(),
        }
    }

    /// Replaces the variant's built-in rule table.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn day(&self) -> DayKey {
        self.day
    }

    pub fn target(&self) -> &Entity {
        &self.target
    }

    /// Guesses, oldest first.
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Guesses, newest first, as the board displays them.
    pub fn guesses_newest_first(&self) -> impl Iterator<Item = &GuessRecord> {
        self.guesses.iter().rev()
    }

    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    pub fn is_solved(&self) -> bool {
        self.guesses.last().is_some_and(GuessRecord::is_solution)
    }

    pub fn has_guessed(&self, id: &str) -> bool {
        self.guessed.contains(id)
    }

    /// Resolves `input` against the roster and records it.
    ///
    /// # Errors
    ///
    /// - [`GuessError::AlreadySolved`] once the target has been found
    /// - [`GuessError::UnknownEntity`] if `input` names no roster entry
    /// - [`GuessError::AlreadyGuessed`] for a repeated identifier
    pub fn submit(&mut self, input: &str) -> Result<&GuessRecord, GuessError> {
        if self.is_solved() {
            return Err(GuessError::AlreadySolved);
        }

        let entity = self
            .roster
            .lookup(input)
            .ok_or_else(|| GuessError::UnknownEntity(input.trim().to_owned()))?;

        if self.guessed.contains(entity.id()) {
            return Err(GuessError::AlreadyGuessed(entity.id().to_owned()));
        }

        let entity = entity.clone();
        Ok(self.record(entity))
    }

    fn record(&mut self, entity: Entity) -> &GuessRecord {
        let comparison = compare(&self.rules, &entity, &self.target);
        let solved = entity.id() == self.target.id();

        self.guessed.insert(entity.id().to_owned());
        self.guesses.push(GuessRecord {
            entity,
            comparison,
            solved,
        });

        &self.guesses[self.guesses.len() - 1]
    }

    /// Roster entries matching `prefix` that have not been guessed yet.
    pub fn suggest(&self, prefix: &str) -> Vec<&Entity> {
        self.roster.suggest(
            prefix,
            |entity| self.guessed.contains(entity.id()),
            self.config.suggestion_limit,
        )
    }

    /// Whether the hint panel is shown at the current guess count.
    pub fn hints_visible(&self) -> bool {
        self.guess_count() >= self.config.hints_visible_after
    }

    /// Status of every hint of the variant, in unlock order.
    pub fn hints(&self) -> Vec<HintStatus> {
        self.variant
            .hints()
            .iter()
            .map(|def| HintStatus::new(*def, self.guess_count(), self.revealed.contains(def.key)))
            .collect()
    }

    /// Reveals the hint stored under `key` and returns its text.
    ///
    /// # Errors
    ///
    /// See [`HintError`]; state is unchanged on error.
    pub fn reveal_hint(&mut self, key: &str) -> Result<String, HintError> {
        let def = self.hint_def(key)?;
        let status = HintStatus::new(def, self.guess_count(), self.revealed.contains(def.key));

        if self.is_solved() {
            return Err(HintError::GameOver);
        }
        if !status.unlocked {
            return Err(HintError::Locked {
                key: def.key,
                remaining: status.remaining,
            });
        }
        if status.revealed {
            return Err(HintError::AlreadyRevealed(def.key));
        }

        let text = self.hint_text(def.key).ok_or(HintError::Unavailable(def.key))?;
        self.revealed.insert(def.key);
        Ok(text)
    }

    /// Text of a hint already revealed, or `None`.
    pub fn revealed_hint(&self, key: &str) -> Option<String> {
        self.revealed
            .contains(key)
            .then(|| self.hint_text(key))
            .flatten()
    }

    fn hint_def(&self, key: &str) -> Result<HintDef, HintError> {
        self.variant
            .hints()
            .iter()
            .find(|def| def.key == key)
            .copied()
            .ok_or_else(|| HintError::UnknownHint(key.to_owned()))
    }

    fn hint_text(&self, key: &str) -> Option<String> {
        self.target
            .get(key)
            .filter(|value| !value.is_blank())
            .map(|value| value.as_text().into_owned())
    }

    /// Clears guesses, hints and the solved state; the target is kept.
    pub fn reset(&mut self) {
        self.guesses.clear();
        self.guessed.clear();
        self.revealed.clear();
    }

    /// Snapshot for a [`ProgressStore`](crate::store::ProgressStore).
    pub fn progress(&self) -> Progress {
        Progress {
            variant: self.variant,
            day: self.day,
            target: self.target.id().to_owned(),
            solved: self.is_solved(),
            guesses: self
                .guesses
                .iter()
                .map(|record| record.entity.id().to_owned())
                .collect(),
            revealed_hints: self.revealed.iter().map(|key| (*key).to_owned()).collect(),
        }
    }

    /// Replays saved progress into this session.
    ///
    /// Progress saved for another variant, day or target is ignored. Saved
    /// identifiers missing from the roster are skipped and reported.
    pub fn restore(&mut self, progress: &Progress) -> RestoreOutcome {
        if progress.variant != self.variant
            || progress.day != self.day
            || progress.target != self.target.id()
        {
            return RestoreOutcome::Stale;
        }

        self.reset();

        let mut replayed = 0;
        let mut skipped = Vec::new();
        for id in &progress.guesses {
            if self.is_solved() || self.guessed.contains(id) {
                continue;
            }
            match self.roster.get(id) {
                Some(entity) => {
                    let entity = entity.clone();
                    self.record(entity);
                    replayed += 1;
                }
                None => skipped.push(id.clone()),
            }
        }

        let synthesized_win = progress.solved && !self.is_solved();
        if synthesized_win {
            let target = self.target.clone();
            self.record(target);
        }

        for key in &progress.revealed_hints {
            if let Ok(def) = self.hint_def(key) {
                self.revealed.insert(def.key);
            }
        }

        RestoreOutcome::Restored {
            replayed,
            skipped,
            synthesized_win,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Verdict;
    use crate::daily::daily_index;

    fn brawler(name: &str, rarity: &str, year: i64) -> Entity {
        Entity::new(name)
            .with("rarity", rarity)
            .with("class", "Damage Dealer")
            .with("releaseYear", year)
            .with("quoteHint", format!("{name} says hi"))
            .with("gadgetHint", format!("{name}'s gadget"))
            .with("titleHint", "")
    }

    fn roster() -> Arc<Roster> {
        Arc::new(
            Roster::new(vec![
                brawler("Shelly", "Starting", 2017),
                brawler("Colt", "Rare", 2017),
                brawler("Spike", "Legendary", 2017),
                brawler("Crow", "Legendary", 2017),
                brawler("Leon", "Legendary", 2018),
                brawler("Amber", "Legendary", 2020),
                brawler("Meg", "Legendary", 2021),
            ])
            .unwrap(),
        )
    }

    fn new_year() -> DayKey {
        DayKey::from_ymd(2025, 1, 1).unwrap()
    }

    fn session() -> GameSession {
        GameSession::start(Variant::BrawlStars, roster(), new_year(), GameConfig::default())
    }

    /// Roster names other than the target, in roster order.
    fn wrong_names(session: &GameSession) -> Vec<String> {
        session
            .roster()
            .iter()
            .filter(|e| e.id() != session.target().id())
            .map(|e| e.id().to_owned())
            .collect()
    }

    #[test]
    fn target_is_the_daily_selection() {
        let session = session();
        let expected = roster().at(daily_index(new_year(), 7)).id().to_owned();
        assert_eq!(session.target().id(), expected);
        // 963 % 7 == 4
        assert_eq!(session.target().id(), "Leon");
    }

    #[test]
    fn guesses_are_kept_oldest_first() {
        let mut session = session();
        session.submit("Shelly").unwrap();
        session.submit("colt").unwrap();

        let chronological: Vec<_> = session.guesses().iter().map(|g| g.entity().id()).collect();
        assert_eq!(chronological, ["Shelly", "Colt"]);

        let newest: Vec<_> = session.guesses_newest_first().map(|g| g.entity().id()).collect();
        assert_eq!(newest, ["Colt", "Shelly"]);
    }

    #[test]
    fn duplicate_guess_is_rejected_without_change() {
        let mut session = session();
        session.submit("Shelly").unwrap();

        let err = session.submit(" SHELLY ").unwrap_err();
        assert_eq!(err, GuessError::AlreadyGuessed("Shelly".into()));
        assert_eq!(session.guess_count(), 1);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let mut session = session();
        let err = session.submit("  Bibi ").unwrap_err();
        assert_eq!(err, GuessError::UnknownEntity("Bibi".into()));
        assert_eq!(session.guess_count(), 0);
    }

    #[test]
    fn guessing_the_target_solves_and_locks_the_session() {
        let mut session = session();
        session.submit("Spike").unwrap();

        let record = session.submit("Leon").unwrap();
        assert!(record.is_solution());
        assert!(record.comparison().is_all_correct());
        assert!(session.is_solved());

        assert_eq!(session.submit("Crow").unwrap_err(), GuessError::AlreadySolved);
    }

    #[test]
    fn comparison_uses_variant_rules() {
        let mut session = session();
        let record = session.submit("Shelly").unwrap();

        assert_eq!(record.comparison().get("releaseYear"), Some(Verdict::Lower));
        assert_eq!(record.comparison().get("rarity"), Some(Verdict::Wrong));
        assert_eq!(record.comparison().get("class"), Some(Verdict::Correct));
        assert_eq!(record.comparison().get("quoteHint"), None);
    }

    #[test]
    fn suggestions_skip_guessed_entries() {
        let mut session = session();
        session.submit("Colt").unwrap();

        let names: Vec<_> = session.suggest("c").into_iter().map(Entity::id).collect();
        assert_eq!(names, ["Crow"]);
    }

    #[test]
    fn hints_unlock_by_guess_count() {
        let mut session = session();
        assert!(!session.hints_visible());

        let err = session.reveal_hint("quoteHint").unwrap_err();
        assert_eq!(
            err,
            HintError::Locked {
                key: "quoteHint",
                remaining: 6
            }
        );

        for name in wrong_names(&session) {
            session.submit(&name).unwrap();
        }
        assert_eq!(session.guess_count(), 6);
        assert!(session.hints_visible());

        assert_eq!(session.reveal_hint("quoteHint").unwrap(), "Leon says hi");
        assert_eq!(
            session.reveal_hint("quoteHint").unwrap_err(),
            HintError::AlreadyRevealed("quoteHint")
        );
        assert_eq!(session.revealed_hint("quoteHint").as_deref(), Some("Leon says hi"));
        assert!(matches!(
            session.reveal_hint("gadgetHint"),
            Err(HintError::Locked { remaining: 6, .. })
        ));
        assert!(matches!(
            session.reveal_hint("nope"),
            Err(HintError::UnknownHint(_))
        ));

        let statuses = session.hints();
        assert!(statuses[0].revealed);
        assert!(!statuses[1].unlocked);
    }

    #[test]
    fn hints_cannot_be_revealed_after_solving() {
        let mut session = session();
        for name in wrong_names(&session) {
            session.submit(&name).unwrap();
        }
        session.submit("Leon").unwrap();
        assert_eq!(session.reveal_hint("quoteHint").unwrap_err(), HintError::GameOver);
    }

    #[test]
    fn reset_clears_history_but_keeps_target() {
        let mut session = session();
        session.submit("Leon").unwrap();
        session.reset();

        assert_eq!(session.guess_count(), 0);
        assert!(!session.is_solved());
        assert_eq!(session.target().id(), "Leon");
        session.submit("Leon").unwrap();
    }

    #[test]
    fn progress_round_trips_through_restore() {
        let mut played = session();
        played.submit("Colt").unwrap();
        played.submit("Leon").unwrap();
        let progress = played.progress();
        assert!(progress.solved);
        assert_eq!(progress.guesses, ["Colt", "Leon"]);

        let mut restored = session();
        let outcome = restored.restore(&progress);

        assert_eq!(
            outcome,
            RestoreOutcome::Restored {
                replayed: 2,
                skipped: Vec::new(),
                synthesized_win: false
            }
        );
        assert_eq!(restored.guesses(), played.guesses());
    }

    #[test]
    fn restore_synthesizes_missing_winning_row_and_skips_unknown_ids() {
        let mut session = session();
        let progress = Progress {
            variant: Variant::BrawlStars,
            day: new_year(),
            target: "Leon".into(),
            solved: true,
            guesses: vec!["Colt".into(), "Retired Brawler".into()],
            revealed_hints: vec!["quoteHint".into(), "bogus".into()],
        };

        let outcome = session.restore(&progress);

        assert_eq!(
            outcome,
            RestoreOutcome::Restored {
                replayed: 1,
                skipped: vec!["Retired Brawler".into()],
                synthesized_win: true
            }
        );
        assert!(session.is_solved());
        assert_eq!(session.guess_count(), 2);
        assert!(session.hints()[0].revealed);
    }

    #[test]
    fn restore_ignores_progress_for_another_target() {
        let mut session = session();
        session.submit("Colt").unwrap();

        let mut progress = session.progress();
        progress.target = "Meg".into();

        assert_eq!(session.restore(&progress), RestoreOutcome::Stale);
        assert_eq!(session.guess_count(), 1);
    }
}
