//! Error types for hex string handling.

use thiserror::Error;

/// A specialized Result type for hex string operations.
pub type HexResult<T> = Result<T, HexError>;

/// Errors produced while decoding hex strings and fixed-width byte values.
#[derive(Error, Debug)]
pub enum HexError {
    /// The hex string contains a character outside `[0-9a-fA-F]`
    #[error("Invalid hex string {input}: {source}")]
    InvalidHex {
        /// The prefixed hex string that failed to decode
        input: String,
        /// The underlying decoding error
        #[source]
        source: hex::FromHexError,
    },

    /// Public key input has the wrong size
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Error occurred during base64 decoding
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl HexError {
    /// Creates an invalid hex error for the given input.
    pub fn invalid_hex(input: impl Into<String>, source: hex::FromHexError) -> Self {
        Self::InvalidHex {
            input: input.into(),
            source,
        }
    }

    /// Returns the error message suitable for display to end users.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidHex { .. } => "Invalid hex format",
            Self::InvalidPublicKey(_) => "Invalid public key",
            Self::Base64(_) => "Invalid base64 format",
        }
    }
}
