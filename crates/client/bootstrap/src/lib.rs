//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, roster sources, file-backed stores and
//! daily game setup that can be reused by the terminal client or any other
//! front-end.
pub mod builder;
pub mod config;
pub mod dirs;
pub mod game;
pub mod source;
pub mod store;

pub use builder::GameBuilder;
pub use config::ClientConfig;
pub use game::DailyGame;
pub use source::{BundledSource, DirectorySource, RosterSource};
pub use store::{FileProgressStore, FileStatsStore};
