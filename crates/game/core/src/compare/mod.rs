//! Attribute comparison: the verdict vocabulary and the engine producing it.
mod engine;
mod verdict;

pub use engine::{Comparison, compare, compare_values};
pub use verdict::{TileColor, Verdict};
