//! Deterministic rules of the daily guessing game.
//!
//! `dle-core` defines the roster model, per-variant rule tables, the
//! attribute comparison engine and the daily selector, plus the session,
//! stats and share-text logic built on top of them. It performs no I/O:
//! rosters come in through [`Roster::new`] and persistence goes through the
//! [`store`] traits.
pub mod compare;
pub mod config;
pub mod daily;
pub mod entity;
pub mod error;
pub mod rules;
pub mod session;
pub mod share;
pub mod stats;
pub mod store;

pub use compare::{Comparison, TileColor, Verdict, compare, compare_values};
pub use config::GameConfig;
pub use daily::{Countdown, DayKey, daily_index, daily_seed, epoch, select_daily};
pub use entity::{AttributeValue, Entity, Record, Roster, RosterError};
pub use error::{ErrorSeverity, GameError};
pub use rules::{
    AttributeKind, Column, Exclusions, HintDef, ORDERED_DELIMITER, OTHER_SENTINEL, RuleTable,
    Tokenizer, Variant,
};
pub use session::{
    GameSession, GuessError, GuessRecord, HintError, HintStatus, Progress, RestoreOutcome,
};
pub use share::{share_text, share_url};
pub use stats::Stats;
pub use store::{
    InMemoryProgressStore, InMemoryStatsStore, ProgressStore, StatsStore, StoreError,
};
