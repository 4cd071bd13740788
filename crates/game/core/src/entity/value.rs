//! Scalar attribute values as they appear in roster records.

use std::borrow::Cow;
use std::fmt;

/// One attribute value of a roster record.
///
/// Roster files are flat key/value maps whose values are either integers
/// (`"cost": 4`) or strings, where strings may encode several categories
/// joined by a delimiter (`"Air / Ground"`). Comparison rules always work on
/// the stringified form, so both variants compare the same way.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum AttributeValue {
    Integer(i64),
    Text(String),
}

impl AttributeValue {
    /// Returns the value rendered as a string (integers in decimal form).
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Integer(value) => Cow::Owned(value.to_string()),
            Self::Text(value) => Cow::Borrowed(value.as_str()),
        }
    }

    /// Blank text counts as a missing value.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Integer(_) => false,
            Self::Text(value) => value.trim().is_empty(),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
