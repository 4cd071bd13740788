//! Common error infrastructure for dle-core.
//!
//! Domain-specific errors (e.g., `GuessError`, `HintError`) are defined next to
//! the operations that raise them. This module holds the shared severity
//! classification and the [`GameError`] trait they all implement.
//!
//! The comparison engine itself never fails: malformed attribute values are
//! recovered locally (see [`crate::compare`]). Errors only come from roster
//! construction, session bookkeeping and the persistence boundary.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Player input that is rejected without changing state.
    ///
    /// Examples: duplicate guess, unknown name, locked hint
    Validation,

    /// Temporary condition at an I/O boundary; the game continues without it.
    ///
    /// Examples: stats file not writable
    Recoverable,

    /// Broken precondition or corrupted data. Indicates a programming or data error.
    ///
    /// Examples: empty roster, duplicate identifiers in a roster file
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Recoverable => "recoverable",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the caller can keep playing after this error.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation | Self::Recoverable)
    }
}

/// Common trait for all dle-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and test assertions.
    fn error_code(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_and_recoverable_allow_play_to_continue() {
        assert!(ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Fatal.is_recoverable());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
