//! Comparison rules: attribute kinds, per-variant rule tables and the
//! built-in variants.
mod kind;
mod table;
mod variant;

pub use kind::{AttributeKind, ORDERED_DELIMITER, Tokenizer};
pub use table::{Exclusions, RuleTable};
pub use variant::{Column, HintDef, OTHER_SENTINEL, Variant};
