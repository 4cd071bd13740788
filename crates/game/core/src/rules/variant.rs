//! Built-in game variants and their rule tables.
//!
//! Both variants run through the same comparison engine; everything that
//! differs between them (identifier key, hidden keys, numeric keys, the
//! "Other" sentinel, tokenizer, hint schedule) is data declared here.

use super::kind::{AttributeKind, Tokenizer};
use super::table::RuleTable;

/// Literal used by the Clash Royale roster for values outside any ordering.
pub const OTHER_SENTINEL: &str = "Other";

/// A display column: which attribute to show and its header label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

/// A hint stored on the target entity, unlocked after `threshold` guesses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HintDef {
    pub key: &'static str,
    pub label: &'static str,
    pub threshold: usize,
}

const fn column(key: &'static str, label: &'static str) -> Column {
    Column { key, label }
}

const fn hint(key: &'static str, label: &'static str, threshold: usize) -> HintDef {
    HintDef {
        key,
        label,
        threshold,
    }
}

const CLASH_COLUMNS: &[Column] = &[
    column("rarity", "Rarity"),
    column("cost", "Cost"),
    column("type", "Type"),
    column("targets", "Targets"),
    column("healthCategory", "Health"),
    column("arena", "Arena"),
    column("moveSpeed", "Speed"),
    column("year", "Year"),
];

const BRAWL_COLUMNS: &[Column] = &[
    column("rarity", "Rarity"),
    column("gender", "Gender"),
    column("class", "Class"),
    column("health", "Health"),
    column("speed", "Speed"),
    column("range", "Range"),
    column("reload", "Reload"),
    column("releaseYear", "Year"),
];

const CLASH_HINTS: &[HintDef] = &[
    hint("hint1", "Quote", 6),
    hint("hint2", "Hint 1", 12),
    hint("hint3", "Hint 2", 18),
];

const BRAWL_HINTS: &[HintDef] = &[
    hint("quoteHint", "Quote", 6),
    hint("gadgetHint", "Gadget", 12),
    hint("titleHint", "Title", 18),
];

/// The two shipped games.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Variant {
    #[default]
    ClashRoyale,
    BrawlStars,
}

impl Variant {
    /// Comparison rules for this variant.
    pub fn rules(self) -> RuleTable {
        match self {
            Self::ClashRoyale => RuleTable::new("card")
                .exclude_key("healthValue")
                .exclude_prefix("hint")
                .with_kind("year", AttributeKind::ordered_with_sentinel(OTHER_SENTINEL))
                .with_kind("cost", AttributeKind::ordered_with_sentinel(OTHER_SENTINEL))
                .with_kind("arena", AttributeKind::ordered_with_sentinel(OTHER_SENTINEL))
                .with_kind("moveSpeed", AttributeKind::FuzzyOrdinal)
                .with_tokenizer(Tokenizer::Delimited),
            Self::BrawlStars => RuleTable::new("name")
                .exclude_suffix("Hint")
                .with_kind("releaseYear", AttributeKind::ordered())
                .with_tokenizer(Tokenizer::SpacedSlash),
        }
    }

    /// Columns in display order.
    pub const fn columns(self) -> &'static [Column] {
        match self {
            Self::ClashRoyale => CLASH_COLUMNS,
            Self::BrawlStars => BRAWL_COLUMNS,
        }
    }

    /// Hints in unlock order.
    pub const fn hints(self) -> &'static [HintDef] {
        match self {
            Self::ClashRoyale => CLASH_HINTS,
            Self::BrawlStars => BRAWL_HINTS,
        }
    }

    /// Title used in headers and share text.
    pub const fn title(self) -> &'static str {
        match self {
            Self::ClashRoyale => "CLASHDLE",
            Self::BrawlStars => "BRAWLDLE",
        }
    }

    /// Singular noun for one roster entry.
    pub const fn noun(self) -> &'static str {
        match self {
            Self::ClashRoyale => "card",
            Self::BrawlStars => "brawler",
        }
    }

    /// Route of the classic mode, appended to the share base URL.
    pub const fn route(self) -> &'static str {
        match self {
            Self::ClashRoyale => "/",
            Self::BrawlStars => "/brawl-stars/classic",
        }
    }

    /// Roster file name relative to the data directory.
    pub const fn roster_file(self) -> &'static str {
        match self {
            Self::ClashRoyale => "clashroyale/cards.json",
            Self::BrawlStars => "brawlstars/brawlers.json",
        }
    }
}
