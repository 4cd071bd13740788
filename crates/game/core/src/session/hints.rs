//! Hint unlocking rules.

use crate::error::{ErrorSeverity, GameError};
use crate::rules::HintDef;

/// Unlock state of one hint for the current guess count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HintStatus {
    pub def: HintDef,
    pub unlocked: bool,
    pub revealed: bool,
    /// Guesses still needed before the hint unlocks (0 once unlocked).
    pub remaining: usize,
}

impl HintStatus {
    pub fn new(def: HintDef, guess_count: usize, revealed: bool) -> Self {
        Self {
            def,
            unlocked: guess_count >= def.threshold,
            revealed,
            remaining: def.threshold.saturating_sub(guess_count),
        }
    }

    /// Whether the player may reveal it now.
    pub fn can_reveal(&self, solved: bool) -> bool {
        self.unlocked && !self.revealed && !solved
    }
}

/// Errors returned when revealing a hint.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HintError {
    #[error("unknown hint `{0}`")]
    UnknownHint(String),

    #[error("hint `{key}` unlocks in {remaining} more guesses")]
    Locked { key: &'static str, remaining: usize },

    #[error("hint `{0}` is already revealed")]
    AlreadyRevealed(&'static str),

    #[error("today's target has no text for hint `{0}`")]
    Unavailable(&'static str),

    #[error("the puzzle is already solved")]
    GameOver,
}

impl GameError for HintError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Unavailable(_) => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownHint(_) => "HINT_UNKNOWN",
            Self::Locked { .. } => "HINT_LOCKED",
            Self::AlreadyRevealed(_) => "HINT_ALREADY_REVEALED",
            Self::Unavailable(_) => "HINT_UNAVAILABLE",
            Self::GameOver => "HINT_GAME_OVER",
        }
    }
}
