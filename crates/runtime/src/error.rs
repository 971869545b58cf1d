//! Unified error type surfaced by the runtime API.
//!
//! Wraps registry failures so callers can bubble them up with consistent
//! context. Resistance implementations that panic are not caught.
use ladder_core::{CoreError, ErrorSeverity, RegistryError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("tier range {min}..={max} is empty")]
    EmptyTierRange { min: i32, max: i32 },

    #[cfg(feature = "content")]
    #[error("failed to load ladder content: {0}")]
    Content(String),
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Registry(inner) => inner.severity(),
            RuntimeError::EmptyTierRange { .. } => ErrorSeverity::Validation,
            #[cfg(feature = "content")]
            RuntimeError::Content(_) => ErrorSeverity::Fatal,
        }
    }
}
