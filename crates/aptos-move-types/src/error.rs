//! Error types for Move type parsing.

use thiserror::Error;

/// A specialized Result type for Move type operations.
pub type MoveTypeResult<T> = Result<T, MoveTypeError>;

/// Errors produced while parsing Move type strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveTypeError {
    /// The input does not match the struct tag grammar
    #[error("Malformed struct tag: {0}")]
    MalformedStructTag(String),

    /// The input exceeds the configured length or nesting limits
    #[error("Input too complex: {0}")]
    InputTooComplex(String),
}

impl MoveTypeError {
    /// Creates a malformed struct tag error with the given reason.
    pub fn malformed<S: Into<String>>(reason: S) -> Self {
        Self::MalformedStructTag(reason.into())
    }

    /// Returns true if this is a grammar error.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedStructTag(_))
    }

    /// Returns the error message suitable for display to end users.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MalformedStructTag(_) => "Invalid type format",
            Self::InputTooComplex(_) => "Type is too complex",
        }
    }
}
