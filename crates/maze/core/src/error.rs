//! Common error infrastructure for the maze and bot crates.
//!
//! Domain errors (`MazeError`, the bot's tick errors) live next to the code
//! that raises them. This module only provides the shared classification used
//! when those errors are logged or mapped to a fallback move.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the next tick may succeed without any change
/// - **Validation**: the input (layout, snapshot) is malformed
/// - **Internal**: state the bot keeps between ticks is inconsistent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all maze and bot errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable identifiers suitable for log filtering
pub trait BotFault: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
