//! Data-driven content and loaders for the daily guessing game.
//!
//! This crate houses the roster files of every variant and provides loaders
//! for JSON/RON rosters and TOML game configuration. Rosters are validated
//! into [`dle_core::Roster`] on load; nothing here knows about sessions or
//! persistence.

#[cfg(feature = "loaders")]
pub mod bundled;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, RosterLoader};
