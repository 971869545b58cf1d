//! Common error infrastructure for ladder-core.
//!
//! Domain-specific errors (e.g. [`crate::RegistryError`]) are defined next to
//! the module that raises them. This module only provides the shared
//! classification used by callers to decide how to react.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the call can be retried with different input
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected inconsistency, indicates a bug
/// - **Fatal**: misconfiguration; the calling operation cannot proceed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative input.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: malformed ladder table, duplicate marker in a ladder
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - the call site is wired to something that does not exist.
    ///
    /// Examples: unknown ladder name after alias resolution
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or a miswired call site.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all ladder-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
