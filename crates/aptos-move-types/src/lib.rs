//! # Move struct tags
//!
//! Parsing and rendering of fully-qualified Move struct types such as
//! `0x1::coin::CoinStore<0x1::aptos_coin::AptosCoin>`.
//!
//! Parsing is bounded: see [`ParserConfig`] for the input length and nesting
//! depth limits.
//!
//! ## Example
//!
//! ```rust
//! use aptos_move_types::{format, parse};
//!
//! let tag = parse("0x0001::Coin::Hello<0x2::Test::Testing<0x3::A::A, 0x4::B::B>>").unwrap();
//! assert_eq!(tag.module.address.hex(), "0x1");
//! assert_eq!(
//!     format(&tag),
//!     "0x1::Coin::Hello<0x2::Test::Testing<0x3::A::A, 0x4::B::B>>"
//! );
//! assert!(parse("0x1::Coin").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

mod config;
mod error;
mod parser;
mod struct_tag;
mod tokenizer;

pub use config::{ParserConfig, DEFAULT_MAX_INPUT_LENGTH, DEFAULT_MAX_NESTING_DEPTH};
pub use error::{MoveTypeError, MoveTypeResult};
pub use parser::StructTagParser;
pub use struct_tag::{ModuleId, StructTag};

/// Parses a struct tag string with the default limits.
///
/// # Errors
///
/// Returns [`MoveTypeError::MalformedStructTag`] if the input is not a valid
/// struct tag, or [`MoveTypeError::InputTooComplex`] if it exceeds the
/// default limits.
pub fn parse(input: &str) -> MoveTypeResult<StructTag> {
    StructTagParser::default().parse(input)
}

/// Renders a struct tag in canonical form.
pub fn format(tag: &StructTag) -> String {
    tag.format()
}
