//! Reference error types

use thiserror::Error;

/// Errors produced while parsing or resolving a variable reference.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    /// The input does not match any known reference shape.
    #[error("malformed reference '{input}': {reason}")]
    MalformedReference {
        /// The offending input.
        input: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The input is not a bare variable reference.
    #[error("unsupported interpolation syntax: '{input}'")]
    UnsupportedInterpolationSyntax {
        /// The offending input.
        input: String,
    },

    /// No value is known for the referenced variable.
    #[error("unresolved variable: '{key}'")]
    UnresolvedVariable {
        /// Canonical key of the variable that could not be resolved.
        key: String,
    },
}

impl ReferenceError {
    /// Creates a [`ReferenceError::MalformedReference`].
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedReference {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a [`ReferenceError::UnsupportedInterpolationSyntax`].
    pub fn unsupported(input: impl Into<String>) -> Self {
        Self::UnsupportedInterpolationSyntax {
            input: input.into(),
        }
    }

    /// Creates a [`ReferenceError::UnresolvedVariable`].
    pub fn unresolved(key: impl Into<String>) -> Self {
        Self::UnresolvedVariable { key: key.into() }
    }

    /// Returns true if this error was raised while classifying or parsing input,
    /// as opposed to resolving a well-formed reference.
    #[must_use]
    pub const fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedReference { .. } | Self::UnsupportedInterpolationSyntax { .. }
        )
    }
}

/// Result type alias for reference operations.
pub type ReferenceResult<T> = Result<T, ReferenceError>;
