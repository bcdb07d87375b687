//! Prefixed hex string type.
//!
//! A [`HexString`] always carries a `0x` prefix. Its digits are kept as
//! given, so `0x00ab` and `0xab` are different values. Validation is
//! deferred until the string is decoded with [`HexString::to_bytes`].

use crate::address::Address;
use crate::error::{HexError, HexResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The prefix carried by every hex string.
pub const HEX_PREFIX: &str = "0x";

/// Removes all leading `0` characters from a string of hex digits.
///
/// An all-zero input yields an empty string.
pub fn trim_leading_zeros(digits: &str) -> &str {
    digits.trim_start_matches('0')
}

/// Anything that can expose its value as a prefixed hex string.
pub trait HexStringLike {
    /// Returns the `0x`-prefixed hex representation.
    fn hex(&self) -> &str;
}

/// A value accepted wherever a hex string is expected.
///
/// This is the input type of [`HexString::ensure`], [`Address::ensure`]
/// and the `equals` predicates.
#[derive(Clone, Debug)]
pub enum MaybeHexString {
    /// A raw string, with or without the `0x` prefix.
    Str(String),
    /// An existing hex string.
    Hex(HexString),
    /// An existing address.
    Address(Address),
}

impl MaybeHexString {
    /// Wraps the `hex()` output of any [`HexStringLike`] value.
    ///
    /// ```rust
    /// use aptos_hex_string::{Address, HexStringLike, MaybeHexString};
    ///
    /// struct Resource(String);
    ///
    /// impl HexStringLike for Resource {
    ///     fn hex(&self) -> &str {
    ///         &self.0
    ///     }
    /// }
    ///
    /// let resource = Resource("0x0001".to_string());
    /// assert!(Address::ensure(MaybeHexString::from_hex_like(&resource)).equals("0x1"));
    /// ```
    pub fn from_hex_like<T: HexStringLike + ?Sized>(value: &T) -> Self {
        Self::Str(value.hex().to_string())
    }

    /// Returns the raw text of this value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Str(s) => s,
            Self::Hex(h) => h.hex(),
            Self::Address(a) => a.hex(),
        }
    }
}

impl From<&str> for MaybeHexString {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for MaybeHexString {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for MaybeHexString {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<HexString> for MaybeHexString {
    fn from(h: HexString) -> Self {
        Self::Hex(h)
    }
}

impl From<&HexString> for MaybeHexString {
    fn from(h: &HexString) -> Self {
        Self::Hex(h.clone())
    }
}

impl From<Address> for MaybeHexString {
    fn from(a: Address) -> Self {
        Self::Address(a)
    }
}

impl From<&Address> for MaybeHexString {
    fn from(a: &Address) -> Self {
        Self::Address(a.clone())
    }
}

/// A hexadecimal string prefixed with `0x`.
///
/// Unlike [`Address`], this type is not normalized: leading zeros and
/// letter case are preserved. Equality is case-insensitive but does not
/// ignore zero padding.
///
/// # Example
///
/// ```rust
/// use aptos_hex_string::HexString;
///
/// let hex = HexString::new("1234");
/// assert_eq!(hex.hex(), "0x1234");
/// assert_eq!(hex.to_bytes().unwrap(), vec![0x12, 0x34]);
/// assert!(!HexString::ensure("0x000001234").equals("0x1234"));
/// ```
#[derive(Clone)]
pub struct HexString(String);

impl HexString {
    /// Creates a hex string, adding the `0x` prefix if it is missing.
    pub fn new(s: impl AsRef<str>) -> Self {
        let s = s.as_ref();
        if s.starts_with(HEX_PREFIX) {
            Self(s.to_string())
        } else {
            Self(format!("{HEX_PREFIX}{s}"))
        }
    }

    /// Encodes bytes as two lower-case hex digits each.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self(format!("{HEX_PREFIX}{}", hex::encode(bytes)))
    }

    /// Coerces a value into a hex string.
    ///
    /// An existing [`HexString`] is returned unchanged.
    pub fn ensure(value: impl Into<MaybeHexString>) -> Self {
        match value.into() {
            MaybeHexString::Hex(h) => h,
            MaybeHexString::Str(s) => Self::new(s),
            MaybeHexString::Address(a) => Self::new(a.hex()),
        }
    }

    /// Returns the prefixed hex string.
    pub fn hex(&self) -> &str {
        &self.0
    }

    /// Returns the prefixed hex string in lower case.
    pub fn lower_hex(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    /// Returns the digits without the `0x` prefix.
    pub fn no_prefix(&self) -> &str {
        &self.0[HEX_PREFIX.len()..]
    }

    /// Returns the value with leading zeros removed.
    ///
    /// An all-zero value shortens to `0x0`.
    pub fn to_short_string(&self) -> String {
        let trimmed = trim_leading_zeros(self.no_prefix());
        if trimmed.is_empty() {
            format!("{HEX_PREFIX}0")
        } else {
            format!("{HEX_PREFIX}{trimmed}")
        }
    }

    /// Returns the digits to decode, with a leading `0` nibble added when
    /// the digit count is odd.
    pub fn hex_bytes_no_prefix(&self) -> String {
        let digits = self.no_prefix();
        if digits.len() % 2 == 1 {
            format!("0{digits}")
        } else {
            digits.to_string()
        }
    }

    /// Decodes the hex digits into bytes.
    ///
    /// # Errors
    ///
    /// Returns [`HexError::InvalidHex`] if any character is not a hex digit.
    pub fn to_bytes(&self) -> HexResult<Vec<u8>> {
        hex::decode(self.hex_bytes_no_prefix()).map_err(|e| {
            tracing::debug!(input = %self.0, error = %e, "failed to decode hex string");
            HexError::invalid_hex(self.0.clone(), e)
        })
    }

    /// Returns true if both values have the same digits, ignoring case.
    ///
    /// Zero padding is significant: `0x01` and `0x1` are not equal.
    pub fn equals(&self, other: impl Into<MaybeHexString>) -> bool {
        self.lower_hex() == Self::ensure(other).lower_hex()
    }
}

impl HexStringLike for HexString {
    fn hex(&self) -> &str {
        &self.0
    }
}

impl PartialEq for HexString {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for HexString {}

impl Hash for HexString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lower_hex().hash(state);
    }
}

impl fmt::Debug for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexString({})", self.0)
    }
}

impl fmt::Display for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HexString {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for HexString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for HexString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for HexString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for HexString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(s))
    }
}
