//! Attribute kinds and the tokenizers used by multi-value attributes.

use std::collections::BTreeSet;

/// Comparison rule attached to an attribute key.
///
/// The set is closed: every key resolves to exactly one kind through
/// [`RuleTable::kind_of`](super::RuleTable::kind_of), and the comparison
/// engine matches on it exhaustively.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum AttributeKind {
    /// Never compared (identifier, hint text, display-only values).
    Excluded,

    /// Unordered set of categories; default for any key the table does not name.
    Categorical,

    /// Numbers compared by ordering, yielding `higher`/`lower`.
    ///
    /// When `sentinel` is set, a value equal to it is compared by exact string
    /// equality only and never ordered.
    Ordered { sentinel: Option<String> },

    /// Labels on an implicit scale ("Slow" < "Fast" < "Very Fast"), where
    /// substring containment stands in for adjacency.
    FuzzyOrdinal,
}

impl AttributeKind {
    /// Ordered kind without a sentinel.
    pub const fn ordered() -> Self {
        Self::Ordered { sentinel: None }
    }

    /// Ordered kind whose `sentinel` value is only ever matched exactly.
    pub fn ordered_with_sentinel(sentinel: impl Into<String>) -> Self {
        Self::Ordered {
            sentinel: Some(sentinel.into()),
        }
    }

    pub const fn is_excluded(&self) -> bool {
        matches!(self, Self::Excluded)
    }
}

/// Delimiter used to separate a multi-value ordered attribute ("3 / 6").
pub const ORDERED_DELIMITER: &str = " / ";

/// How a categorical value is split into tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Tokenizer {
    /// Split on `" / "` only.
    SpacedSlash,

    /// Split on `/` and `,`, treating `&` and a standalone `and` as `/`.
    #[default]
    Delimited,
}

impl Tokenizer {
    /// Splits `raw` into a set of trimmed, lower-cased, non-empty tokens.
    pub fn tokenize(self, raw: &str) -> BTreeSet<String> {
        let lowered = raw.to_lowercase();
        match self {
            Self::SpacedSlash => lowered
                .split(ORDERED_DELIMITER)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_owned)
                .collect(),
            Self::Delimited => {
                // Collapse whitespace runs so " and " matches however it was spaced.
                let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
                collapsed
                    .replace(" and ", "/")
                    .replace('&', "/")
                    .split(['/', ','])
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .map(str::to_owned)
                    .collect()
            }
        }
    }
}
