/// Per-attribute comparison result.
///
/// The five names are a public contract shared with every renderer and the
/// persisted progress format; do not rename or extend them.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Verdict {
    /// Exact match (green).
    Correct,
    /// Partial overlap or adjacent label (amber).
    Close,
    /// No overlap (red).
    Wrong,
    /// Guess is above the target (red, pointing down toward the answer).
    Higher,
    /// Guess is below the target (red, pointing up toward the answer).
    Lower,
}

impl Verdict {
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }

    /// True for `higher` / `lower`.
    pub const fn is_directional(self) -> bool {
        matches!(self, Self::Higher | Self::Lower)
    }

    /// Tile color shown to the player.
    pub const fn color(self) -> TileColor {
        match self {
            Self::Correct => TileColor::Green,
            Self::Close => TileColor::Amber,
            Self::Wrong | Self::Higher | Self::Lower => TileColor::Red,
        }
    }

    /// Arrow pointing from the guess toward the answer, for directional verdicts.
    pub const fn marker(self) -> Option<char> {
        match self {
            Self::Higher => Some('▼'),
            Self::Lower => Some('▲'),
            Self::Correct | Self::Close | Self::Wrong => None,
        }
    }
}

/// Three-color palette of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TileColor {
    Green,
    Amber,
    Red,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn vocabulary_is_exactly_five_lowercase_names() {
        let names: Vec<String> = Verdict::iter().map(|v| v.to_string()).collect();
        assert_eq!(names, ["correct", "close", "wrong", "higher", "lower"]);
        assert_eq!("close".parse::<Verdict>().unwrap(), Verdict::Close);
    }

    #[test]
    fn only_directional_verdicts_carry_a_marker() {
        for verdict in Verdict::iter() {
            assert_eq!(verdict.marker().is_some(), verdict.is_directional());
        }
    }

    #[test]
    fn colors_follow_the_legend() {
        assert_eq!(Verdict::Correct.color(), TileColor::Green);
        assert_eq!(Verdict::Close.color(), TileColor::Amber);
        assert_eq!(Verdict::Higher.color(), TileColor::Red);
        assert_eq!(Verdict::Lower.color(), TileColor::Red);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_lowercase_names() {
        assert_eq!(serde_json::to_string(&Verdict::Higher).unwrap(), "\"higher\"");
    }
}
