//! Registry construction and lookup errors.

use crate::error::{CoreError, ErrorSeverity};
use crate::ladder::{LadderKind, StateId};

/// Errors raised while building or querying a [`crate::LadderRegistry`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Ladder name not registered after alias resolution.
    ///
    /// Always a wiring bug at the call site, never user input to recover from.
    #[error("unknown ladder `{0}`")]
    UnknownLadder(String),

    /// Ladder positions violate the ladder invariants.
    #[error("ladder `{kind}` is invalid: {reason}")]
    InvalidLadder {
        kind: LadderKind,
        reason: &'static str,
    },

    /// Same marker listed twice on one ladder.
    #[error("ladder `{kind}` lists marker {marker} more than once")]
    DuplicateMarker { kind: LadderKind, marker: StateId },

    /// Same ladder defined twice in one table.
    #[error("ladder `{0}` is defined more than once")]
    DuplicateLadder(LadderKind),

    /// Alternate name claimed by two ladders.
    #[error("alias `{0}` is claimed by more than one ladder")]
    DuplicateAlias(String),

    /// Alternate name is unusable.
    #[error("alias `{alias}` is invalid: {reason}")]
    InvalidAlias {
        alias: String,
        reason: &'static str,
    },

    /// A ladder listed as strong or weak against itself.
    #[error("ladder `{0}` cannot relate to itself")]
    SelfRelation(LadderKind),

    /// Relation or pair entry given twice for the same ladder.
    #[error("relations for ladder `{0}` are given more than once")]
    DuplicateRelation(LadderKind),

    /// Relation or pair references a ladder missing from the table.
    #[error("ladder `{kind}` references undefined ladder `{target}`")]
    UndefinedRelation {
        kind: LadderKind,
        target: LadderKind,
    },
}

impl CoreError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        use RegistryError::*;
        match self {
            UnknownLadder(_) => ErrorSeverity::Fatal,
            InvalidLadder { .. } | DuplicateMarker { .. } | DuplicateLadder(_) => {
                ErrorSeverity::Validation
            }
            DuplicateAlias(_) | InvalidAlias { .. } => ErrorSeverity::Validation,
            SelfRelation(_) | DuplicateRelation(_) | UndefinedRelation { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use RegistryError::*;
        match self {
            UnknownLadder(_) => "REGISTRY_UNKNOWN_LADDER",
            InvalidLadder { .. } => "REGISTRY_INVALID_LADDER",
            DuplicateMarker { .. } => "REGISTRY_DUPLICATE_MARKER",
            DuplicateLadder(_) => "REGISTRY_DUPLICATE_LADDER",
            DuplicateAlias(_) => "REGISTRY_DUPLICATE_ALIAS",
            InvalidAlias { .. } => "REGISTRY_INVALID_ALIAS",
            SelfRelation(_) => "REGISTRY_SELF_RELATION",
            DuplicateRelation(_) => "REGISTRY_DUPLICATE_RELATION",
            UndefinedRelation { .. } => "REGISTRY_UNDEFINED_RELATION",
        }
    }
}
