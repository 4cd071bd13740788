//! Roster data: entities, their attribute values and the roster container.
mod model;
mod roster;
mod value;

pub use model::{Entity, Record};
pub use roster::Roster;
pub use value::AttributeValue;

use crate::error::{ErrorSeverity, GameError};

/// Errors raised while building a roster from records.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("roster is empty; at least one entity is required")]
    Empty,

    #[error("record has no identifier under key `{id_key}`")]
    MissingIdentifier { id_key: String },

    #[error("identifier `{0}` appears more than once in the roster")]
    DuplicateIdentifier(String),
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "ROSTER_EMPTY",
            Self::MissingIdentifier { .. } => "ROSTER_MISSING_IDENTIFIER",
            Self::DuplicateIdentifier(_) => "ROSTER_DUPLICATE_IDENTIFIER",
        }
    }
}
