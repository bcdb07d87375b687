//! Move module and struct tag types.
//!
//! A struct tag is the fully-qualified type of a Move struct:
//! `address::module::Name<TypeParam, ...>`, where each type parameter is
//! itself a struct tag.

use crate::error::{MoveTypeError, MoveTypeResult};
use crate::parser::StructTagParser;
use aptos_hex_string::{Address, MaybeHexString};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Move module identifier (`address::module_name`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleId {
    /// The address where the module is published.
    pub address: Address,
    /// The name of the module.
    pub identifier: String,
}

impl ModuleId {
    /// Creates a new module ID. The address is normalized.
    pub fn new(address: impl Into<MaybeHexString>, identifier: impl Into<String>) -> Self {
        Self {
            address: Address::ensure(address),
            identifier: identifier.into(),
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.address, self.identifier)
    }
}

impl FromStr for ModuleId {
    type Err = MoveTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StructTagParser::default().parse_module_id(s)
    }
}

/// A struct tag identifies a specific struct type in Move.
///
/// Format: `address::module::StructName<TypeParam1, TypeParam2, ...>`
///
/// Equality is structural. Type parameters are compared in order.
///
/// # Example
///
/// ```rust
/// use aptos_move_types::StructTag;
///
/// let tag = StructTag::parse("0x1::Coin::Coin<0x2::A::B, 0x3::C::D<0x4::E::F>>").unwrap();
/// assert_eq!(tag.name, "Coin");
/// assert_eq!(tag.type_params[1].type_params[0].name, "F");
/// assert_eq!(tag.to_string(), "0x1::Coin::Coin<0x2::A::B, 0x3::C::D<0x4::E::F>>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructTag {
    /// The module that defines the struct.
    pub module: ModuleId,
    /// The struct name.
    pub name: String,
    /// Type parameters (for generic structs).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<StructTag>,
}

impl StructTag {
    /// Creates a new struct tag.
    pub fn new(module: ModuleId, name: impl Into<String>, type_params: Vec<StructTag>) -> Self {
        Self {
            module,
            name: name.into(),
            type_params,
        }
    }

    /// Creates a struct tag with no type parameters.
    pub fn simple(
        address: impl Into<MaybeHexString>,
        module: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::new(ModuleId::new(address, module), name, vec![])
    }

    /// Parses a struct tag using the default parser limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is malformed or too complex.
    pub fn parse(input: &str) -> MoveTypeResult<Self> {
        StructTagParser::default().parse(input)
    }

    /// Renders the struct tag in canonical form.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Same as [`StructTag::format`].
    pub fn fully_qualified_name(&self) -> String {
        self.format()
    }

    /// Returns `address::module::Name`, without type parameters.
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.module, self.name)
    }

    /// Returns true if the struct has type parameters.
    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module, self.name)?;
        if !self.type_params.is_empty() {
            write!(f, "<")?;
            for (i, param) in self.type_params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{param}")?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

impl FromStr for StructTag {
    type Err = MoveTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for StructTag {
    type Error = MoveTypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin() -> StructTag {
        StructTag::simple("0x1", "aptos_coin", "AptosCoin")
    }

    #[test]
    fn test_module_id() {
        let module = ModuleId::new("0x0001", "coin");
        assert_eq!(module.address, Address::new("0x1"));
        assert_eq!(module.identifier, "coin");
        assert_eq!(module.to_string(), "0x1::coin");
    }

    #[test]
    fn test_module_id_from_str() {
        let module: ModuleId = "0x1::coin".parse().unwrap();
        assert_eq!(module, ModuleId::new(Address::new("0x1"), "coin"));

        assert!("0x1".parse::<ModuleId>().is_err());
        assert!("0x1::".parse::<ModuleId>().is_err());
        assert!("0x1::coin::Coin".parse::<ModuleId>().is_err());
    }

    #[test]
    fn test_module_id_equality() {
        assert_eq!(ModuleId::new("0x01", "coin"), ModuleId::new("0x1", "coin"));
        assert_ne!(ModuleId::new("0x1", "coin"), ModuleId::new("0x1", "Coin"));
        assert_ne!(ModuleId::new("0x1", "coin"), ModuleId::new("0x2", "coin"));
    }

    #[test]
    fn test_display_simple() {
        assert_eq!(coin().to_string(), "0x1::aptos_coin::AptosCoin");
        assert_eq!(coin().format(), "0x1::aptos_coin::AptosCoin");
        assert!(!coin().is_generic());
    }

    #[test]
    fn test_display_with_type_params() {
        let store = StructTag::new(ModuleId::new("0x1", "coin"), "CoinStore", vec![coin()]);
        assert_eq!(
            store.to_string(),
            "0x1::coin::CoinStore<0x1::aptos_coin::AptosCoin>"
        );
        assert_eq!(store.full_name(), "0x1::coin::CoinStore");
        assert!(store.is_generic());
    }

    #[test]
    fn test_display_multiple_type_params() {
        let pair = StructTag::new(
            ModuleId::new("0x1", "pool"),
            "Pair",
            vec![coin(), StructTag::simple("0x00ab", "usdc", "USDC")],
        );
        assert_eq!(
            pair.fully_qualified_name(),
            "0x1::pool::Pair<0x1::aptos_coin::AptosCoin, 0xab::usdc::USDC>"
        );
    }

    #[test]
    fn test_structural_equality() {
        let a = StructTag::new(ModuleId::new("0x1", "m"), "S", vec![coin()]);
        let b = StructTag::new(ModuleId::new("0x0001", "m"), "S", vec![coin()]);
        assert_eq!(a, b);

        let swapped = StructTag::new(
            ModuleId::new("0x1", "m"),
            "S",
            vec![coin(), StructTag::simple("0x2", "x", "Y")],
        );
        let reversed = StructTag::new(
            ModuleId::new("0x1", "m"),
            "S",
            vec![StructTag::simple("0x2", "x", "Y"), coin()],
        );
        assert_ne!(swapped, reversed);
        assert_ne!(a, StructTag::simple("0x1", "m", "S"));
    }

    #[test]
    fn test_json_serialization() {
        let tag = StructTag::new(ModuleId::new("0x1", "Coin"), "Coin", vec![coin()]);
        let json = serde_json::to_value(&tag).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "module": { "address": "0x1", "identifier": "Coin" },
                "name": "Coin",
                "typeParams": [
                    {
                        "module": { "address": "0x1", "identifier": "aptos_coin" },
                        "name": "AptosCoin"
                    }
                ]
            })
        );

        let parsed: StructTag = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, tag);
    }

    #[test]
    fn test_json_absent_type_params() {
        let parsed: StructTag = serde_json::from_str(
            r#"{"module": {"address": "0x0001", "identifier": "m"}, "name": "S"}"#,
        )
        .unwrap();
        assert_eq!(parsed, StructTag::simple("0x1", "m", "S"));
        assert!(parsed.type_params.is_empty());
    }

    #[test]
    fn test_try_from() {
        let tag = StructTag::try_from("0x1::aptos_coin::AptosCoin").unwrap();
        assert_eq!(tag, coin());
        assert!(StructTag::try_from("0x1::aptos_coin").is_err());
    }
}
