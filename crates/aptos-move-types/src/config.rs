//! Parser configuration.
//!
//! Limits applied to untrusted struct tag input. The defaults are generous
//! enough for any realistic on-chain type.

use serde::{Deserialize, Serialize};

/// Default maximum input length in bytes.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 1024;

/// Default maximum depth of nested type parameters.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 8;

/// Limits for [`StructTagParser`](crate::StructTagParser).
///
/// Missing fields take their default values when deserialized, so the
/// config can be embedded in a larger settings file.
///
/// # Example
///
/// ```rust
/// use aptos_move_types::ParserConfig;
///
/// let config = ParserConfig::default().with_max_nesting_depth(4);
/// assert_eq!(config.max_nesting_depth, 4);
/// assert_eq!(config.max_input_length, 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Inputs longer than this many bytes are rejected before tokenizing.
    pub max_input_length: usize,
    /// Type parameters nested deeper than this are rejected.
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Sets the maximum input length in bytes.
    #[must_use]
    pub fn with_max_input_length(mut self, max_input_length: usize) -> Self {
        self.max_input_length = max_input_length;
        self
    }

    /// Sets the maximum nesting depth of type parameters.
    #[must_use]
    pub fn with_max_nesting_depth(mut self, max_nesting_depth: usize) -> Self {
        self.max_nesting_depth = max_nesting_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ParserConfig::default();
        assert_eq!(config.max_input_length, DEFAULT_MAX_INPUT_LENGTH);
        assert_eq!(config.max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
    }

    #[test]
    fn test_builder() {
        let config = ParserConfig::default()
            .with_max_input_length(64)
            .with_max_nesting_depth(2);
        assert_eq!(config.max_input_length, 64);
        assert_eq!(config.max_nesting_depth, 2);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ParserConfig = serde_json::from_str(r#"{"max_nesting_depth": 3}"#).unwrap();
        assert_eq!(config.max_nesting_depth, 3);
        assert_eq!(config.max_input_length, DEFAULT_MAX_INPUT_LENGTH);

        let config: ParserConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ParserConfig::default());
    }
}
