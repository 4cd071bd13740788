/// Tunable game parameters shared by both variants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Maximum number of suggestions returned for a typed prefix.
    pub suggestion_limit: usize,
    /// Guesses required before the hint panel is shown at all.
    pub hints_visible_after: usize,
}

impl GameConfig {
    pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;
    pub const DEFAULT_HINTS_VISIBLE_AFTER: usize = 2;

    pub fn new() -> Self {
        Self {
            suggestion_limit: Self::DEFAULT_SUGGESTION_LIMIT,
            hints_visible_after: Self::DEFAULT_HINTS_VISIBLE_AFTER,
        }
    }

    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit.max(1);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_limit_is_at_least_one() {
        assert_eq!(GameConfig::new().with_suggestion_limit(0).suggestion_limit, 1);
        assert_eq!(GameConfig::new().with_suggestion_limit(3).suggestion_limit, 3);
    }
}
