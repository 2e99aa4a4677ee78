//! Common error infrastructure for skirmish-core.
//!
//! Domain-specific errors (`CombatError`, `EquipError`, `ResolveError`) are
//! defined in the modules they validate. This module provides the shared
//! severity classification that the runtime uses to decide whether a failed
//! submission should be re-prompted or treated as a corrupted session.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the decision layer may retry with a corrected action
/// - **Validation**: invalid input, rejected without mutation
/// - **Internal**: state inconsistency that signals an engine bug
/// - **Fatal**: the combat cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - combat state corrupted or terminated, cannot continue.
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

    /// Returns true if a corrected resubmission is worth attempting.
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all skirmish-core errors.
///
/// Provides a uniform interface for error classification so the runtime can
/// route failures without matching on every concrete variant.
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
