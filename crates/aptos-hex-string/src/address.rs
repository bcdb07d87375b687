//! Account address type.
//!
//! Addresses are hex strings normalized at construction: lower-cased and
//! with leading zeros trimmed, so `0x0001` and `0x1` are the same address.

use crate::error::HexResult;
use crate::hex_string::{trim_leading_zeros, HexString, HexStringLike, MaybeHexString, HEX_PREFIX};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Sha3_256};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The length of a full account address in bytes.
pub const ADDRESS_LENGTH: usize = 32;

/// Default number of hex digits kept before the ellipsis by [`Address::shortened`].
pub const DEFAULT_SHORTENED_LEADING: usize = 5;

/// Default number of hex digits kept after the ellipsis by [`Address::shortened`].
pub const DEFAULT_SHORTENED_TRAILING: usize = 3;

const ELLIPSIS: char = '\u{2026}';

/// An account address, backed by a normalized hex string.
///
/// # Example
///
/// ```rust
/// use aptos_hex_string::Address;
///
/// let addr = Address::new("0x000001234");
/// assert_eq!(addr.hex(), "0x1234");
/// assert!(addr.equals("0x1234"));
/// assert_eq!(Address::new("0xABCD"), Address::new("0xabcd"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address(HexString);

impl Address {
    /// Creates an address from a hex string (with or without `0x` prefix).
    ///
    /// The digits are lower-cased and leading zeros are trimmed. No hex
    /// validation happens here; see [`Address::to_bytes`].
    pub fn new(s: impl AsRef<str>) -> Self {
        let s = s.as_ref();
        let digits = s.strip_prefix(HEX_PREFIX).unwrap_or(s).to_ascii_lowercase();
        let trimmed = trim_leading_zeros(&digits);
        if trimmed.is_empty() {
            Self(HexString::new("0"))
        } else {
            Self(HexString::new(trimmed))
        }
    }

    /// Creates an address from its byte representation.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self::ensure(HexString::from_bytes(bytes))
    }

    /// Coerces a value into an address.
    ///
    /// An existing [`Address`] is returned unchanged.
    pub fn ensure(value: impl Into<MaybeHexString>) -> Self {
        match value.into() {
            MaybeHexString::Address(a) => a,
            MaybeHexString::Str(s) => Self::new(s),
            MaybeHexString::Hex(h) => Self::new(h.hex()),
        }
    }

    /// Returns the normalized prefixed hex string.
    pub fn hex(&self) -> &str {
        self.0.hex()
    }

    /// Returns the normalized digits without the `0x` prefix.
    pub fn no_prefix(&self) -> &str {
        self.0.no_prefix()
    }

    /// Returns the short form. Addresses are already trimmed, so this is
    /// the same as [`Address::hex`].
    pub fn to_short_string(&self) -> String {
        self.0.to_short_string()
    }

    /// Returns a view of this address as a generic hex string.
    pub fn to_hex_string(&self) -> HexString {
        self.0.clone()
    }

    /// Decodes the address into bytes.
    ///
    /// The result is not padded to [`ADDRESS_LENGTH`]; `0x1` decodes to a
    /// single byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the address contains non-hex characters.
    pub fn to_bytes(&self) -> HexResult<Vec<u8>> {
        self.0.to_bytes()
    }

    /// Returns true if both addresses normalize to the same value.
    pub fn equals(&self, other: impl Into<MaybeHexString>) -> bool {
        *self == Self::ensure(other)
    }

    /// Returns the mixed-case checksum encoding of this address.
    ///
    /// The digits are zero-padded to 64 characters and hashed with
    /// SHA3-256 as ASCII text. A digit is upper-cased when the matching
    /// nibble of the hash is 8 or more. Leading zeros are trimmed again
    /// from the result.
    pub fn checksum(&self) -> String {
        let padded = format!("{:0>width$}", self.no_prefix(), width = ADDRESS_LENGTH * 2);

        let mut hasher = Sha3_256::new();
        hasher.update(padded.as_bytes());
        let hashed = hasher.finalize();

        let mut chars: Vec<char> = padded.chars().collect();
        // Only the first 64 digits are covered by the 32 hash bytes.
        for (i, byte) in hashed.iter().enumerate() {
            let hi = 2 * i;
            let lo = hi + 1;
            if byte >> 4 >= 8 {
                if let Some(c) = chars.get_mut(hi) {
                    c.make_ascii_uppercase();
                }
            }
            if byte & 0x0f >= 8 {
                if let Some(c) = chars.get_mut(lo) {
                    c.make_ascii_uppercase();
                }
            }
        }

        let encoded: String = chars.into_iter().collect();
        let trimmed = trim_leading_zeros(&encoded);
        if trimmed.is_empty() {
            format!("{HEX_PREFIX}0")
        } else {
            format!("{HEX_PREFIX}{trimmed}")
        }
    }

    /// Returns the checksum address shortened for display, keeping five
    /// leading and three trailing digits.
    pub fn shortened(&self) -> String {
        self.shortened_with(DEFAULT_SHORTENED_LEADING, DEFAULT_SHORTENED_TRAILING)
    }

    /// Returns the checksum address shortened to `0x`, `leading` digits, an
    /// ellipsis, and the last `trailing` digits.
    ///
    /// The two windows never overlap; a short address is returned with the
    /// trailing window clipped to what follows the leading one. Windows are
    /// counted in characters, so unvalidated input never splits a character.
    pub fn shortened_with(&self, leading: usize, trailing: usize) -> String {
        let chars: Vec<char> = self.checksum().chars().collect();
        let len = chars.len();
        let head_end = (leading + HEX_PREFIX.len()).min(len);
        let tail_start = len.saturating_sub(trailing).max(head_end);

        let mut shortened: String = chars[..head_end].iter().collect();
        shortened.push(ELLIPSIS);
        shortened.extend(&chars[tail_start..]);
        shortened
    }
}

impl HexStringLike for Address {
    fn hex(&self) -> &str {
        self.0.hex()
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::new("0x0")
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl FromStr for Address {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<HexString> for Address {
    fn from(h: HexString) -> Self {
        Self::new(h.hex())
    }
}

impl From<Address> for HexString {
    fn from(a: Address) -> Self {
        a.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        self.hex()
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(s))
    }
}
