//! # Aptos hex strings
//!
//! Value types for hex-encoded data on Aptos:
//!
//! - [`HexString`] - a `0x`-prefixed hex string that keeps its digits as given
//! - [`Address`] - an account address, normalized to lower case without
//!   leading zeros, with mixed-case checksum encoding for display
//! - [`PublicKey`] - a fixed-width 32-byte public key
//!
//! ## Example
//!
//! ```rust
//! use aptos_hex_string::{Address, HexString};
//!
//! let addr = Address::ensure("0x000001234");
//! assert!(addr.equals("0x1234"));
//! assert!(!HexString::ensure("0x000001234").equals("0x1234"));
//!
//! let full = Address::new("0x88fbd33f54e1126269769780feb24480428179f552e2313fbe571b72e62a1ca1");
//! assert_eq!(full.shortened(), "0x88fbd\u{2026}CA1");
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

mod address;
mod error;
mod hex_string;
mod padding;
mod public_key;

pub use address::{
    Address, ADDRESS_LENGTH, DEFAULT_SHORTENED_LEADING, DEFAULT_SHORTENED_TRAILING,
};
pub use error::{HexError, HexResult};
pub use hex_string::{trim_leading_zeros, HexString, HexStringLike, MaybeHexString, HEX_PREFIX};
pub use padding::zero_pad_bytes;
pub use public_key::{PublicKey, PUBLIC_KEY_LENGTH};
