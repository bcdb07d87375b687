//! ED25519 public key value.
//!
//! A fixed-width 32-byte value with base64 and hex conversions. Inputs are
//! read as big-endian numbers, so leading zero bytes are not significant.

use crate::error::{HexError, HexResult};
use crate::hex_string::{HexString, MaybeHexString};
use crate::padding::zero_pad_bytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of a public key in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// A 32-byte ED25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    /// Creates a public key from a byte array.
    pub const fn new(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Creates a public key from big-endian bytes, left-padding with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`HexError::InvalidPublicKey`] if the value needs more than
    /// 32 bytes once leading zeros are dropped.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> HexResult<Self> {
        let bytes = bytes.as_ref();
        let first_significant = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let significant = &bytes[first_significant..];
        if significant.len() > PUBLIC_KEY_LENGTH {
            return Err(HexError::InvalidPublicKey(format!(
                "value needs {} bytes (max {})",
                significant.len(),
                PUBLIC_KEY_LENGTH
            )));
        }
        let mut key = [0u8; PUBLIC_KEY_LENGTH];
        key.copy_from_slice(&zero_pad_bytes(significant, PUBLIC_KEY_LENGTH));
        Ok(Self(key))
    }

    /// Creates a public key from a base64 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid base64 or does not decode
    /// to exactly 32 bytes.
    pub fn from_base64(s: &str) -> HexResult<Self> {
        let bytes = base64::decode(s)?;
        if bytes.len() != PUBLIC_KEY_LENGTH {
            return Err(HexError::InvalidPublicKey(format!(
                "expected {} bytes, got {}",
                PUBLIC_KEY_LENGTH,
                bytes.len()
            )));
        }
        Self::from_bytes(bytes)
    }

    /// Creates a public key from a hex string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid hex or is too large.
    pub fn from_hex(value: impl Into<MaybeHexString>) -> HexResult<Self> {
        Self::from_bytes(HexString::ensure(value).to_bytes()?)
    }

    /// Returns the key as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the key as a byte array.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.0
    }

    /// Returns the base64 representation of the key.
    pub fn to_base64(&self) -> String {
        base64::encode(self.0)
    }

    /// Returns the key as a full-width hex string.
    pub fn to_hex_string(&self) -> HexString {
        HexString::from_bytes(self.0)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_base64())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base64())
    }
}

impl FromStr for PublicKey {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base64(s)
    }
}

impl From<[u8; PUBLIC_KEY_LENGTH]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_base64(&s).map_err(serde::de::Error::custom)
    }
}
