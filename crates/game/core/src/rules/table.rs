use std::collections::BTreeMap;

use super::kind::{AttributeKind, Tokenizer};

/// Keys that are never compared, by exact name, prefix or suffix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Exclusions {
    pub keys: Vec<String>,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
}

impl Exclusions {
    pub fn matches(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
            || self.prefixes.iter().any(|p| key.starts_with(p.as_str()))
            || self.suffixes.iter().any(|s| key.ends_with(s.as_str()))
    }
}

/// Per-variant mapping from attribute key to comparison rule.
///
/// Keys named in `kinds` use that rule; excluded keys and the identifier key
/// are skipped; every other key falls back to [`AttributeKind::Categorical`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleTable {
    /// Record key holding the entity identifier.
    pub id_key: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exclusions: Exclusions,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kinds: BTreeMap<String, AttributeKind>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tokenizer: Tokenizer,
}

impl RuleTable {
    pub fn new(id_key: impl Into<String>) -> Self {
        Self {
            id_key: id_key.into(),
            exclusions: Exclusions::default(),
            kinds: BTreeMap::new(),
            tokenizer: Tokenizer::default(),
        }
    }

    #[must_use]
    pub fn with_kind(mut self, key: impl Into<String>, kind: AttributeKind) -> Self {
        self.kinds.insert(key.into(), kind);
        self
    }

    #[must_use]
    pub fn exclude_key(mut self, key: impl Into<String>) -> Self {
        self.exclusions.keys.push(key.into());
        self
    }

    #[must_use]
    pub fn exclude_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.exclusions.prefixes.push(prefix.into());
        self
    }

    #[must_use]
    pub fn exclude_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.exclusions.suffixes.push(suffix.into());
        self
    }

    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Resolves the comparison rule for `key`.
    ///
    /// Exclusion wins over an explicit kind, so a key cannot be both hidden
    /// and compared.
    pub fn kind_of(&self, key: &str) -> AttributeKind {
        if key == self.id_key || self.exclusions.matches(key) {
            return AttributeKind::Excluded;
        }
        self.kinds
            .get(key)
            .cloned()
            .unwrap_or(AttributeKind::Categorical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RuleTable {
        RuleTable::new("card")
            .exclude_key("healthValue")
            .exclude_prefix("hint")
            .exclude_suffix("Hint")
            .with_kind("cost", AttributeKind::ordered())
            .with_kind("moveSpeed", AttributeKind::FuzzyOrdinal)
    }

    #[test]
    fn identifier_and_exclusions_resolve_to_excluded() {
        let table = table();
        for key in ["card", "healthValue", "hint1", "quoteHint"] {
            assert_eq!(table.kind_of(key), AttributeKind::Excluded, "{key}");
        }
    }

    #[test]
    fn named_keys_use_their_kind() {
        let table = table();
        assert_eq!(table.kind_of("cost"), AttributeKind::ordered());
        assert_eq!(table.kind_of("moveSpeed"), AttributeKind::FuzzyOrdinal);
    }

    #[test]
    fn unknown_keys_default_to_categorical() {
        assert_eq!(table().kind_of("elixirColor"), AttributeKind::Categorical);
    }

    #[test]
    fn exclusion_wins_over_explicit_kind() {
        let table = table().with_kind("hintCost", AttributeKind::ordered());
        assert_eq!(table.kind_of("hintCost"), AttributeKind::Excluded);
    }
}
