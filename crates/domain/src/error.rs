//! Unified error types for the domain layer
//!
//! Provides a common error type for wizard and value-object operations so the
//! player crate can handle domain failures without resorting to String errors.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown country code: +44");
        assert_eq!(err.to_string(), "Parse error: Unknown country code: +44");
    }

    #[test]
    fn test_invalid_state_transition() {
        let err = DomainError::invalid_state_transition("cannot go back from the first step");
        assert!(matches!(err, DomainError::InvalidStateTransition(_)));
        assert!(err.to_string().starts_with("Invalid state transition"));
    }
}
