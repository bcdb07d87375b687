//! Behavioral tests for struct tag parsing and address canonicalization.

use aptos_hex_string::{Address, HexString};
use aptos_move_types::{
    format, parse, ModuleId, MoveTypeError, ParserConfig, StructTag, StructTagParser,
};
use proptest::prelude::*;

const NESTED: &str = "0x1::Coin::Hello<0x2::Test::Testing<0x3::A::A, 0x4::B::B>, 0x3::A::A>";

#[test]
fn test_round_trip_canonical_inputs() {
    for input in [
        "0x1::Coin::Hello",
        "0x1::Coin::Coin<0x2::Tester::Test>",
        "0x1::Coin::Hello<0x2::Test::Testing<0x3::A::A, 0x4::B::B>>",
        NESTED,
        "0x1::coin::CoinStore<0x1::aptos_coin::AptosCoin>",
    ] {
        let tag = parse(input).unwrap();
        assert_eq!(format(&tag), input);
        assert_eq!(tag.to_string(), input);
    }
}

#[test]
fn test_nested_structure() {
    let tag = parse(NESTED).unwrap();
    let expected = StructTag::new(
        ModuleId::new("0x1", "Coin"),
        "Hello",
        vec![
            StructTag::new(
                ModuleId::new("0x2", "Test"),
                "Testing",
                vec![
                    StructTag::simple("0x3", "A", "A"),
                    StructTag::simple("0x4", "B", "B"),
                ],
            ),
            StructTag::simple("0x3", "A", "A"),
        ],
    );
    assert_eq!(tag, expected);
}

#[test]
fn test_non_canonical_input_is_canonicalized() {
    assert_eq!(format(&parse("0x0001::A::B").unwrap()), "0x1::A::B");
    assert_eq!(
        format(&parse("0x01::a::B<0x0002::c::D,0x3::e::F>").unwrap()),
        "0x1::a::B<0x2::c::D, 0x3::e::F>"
    );
    assert_eq!(
        format(&parse("  0x1 :: a :: B < 0x2::c::D >").unwrap()),
        "0x1::a::B<0x2::c::D>"
    );
}

#[test]
fn test_missing_name_is_malformed() {
    let err = parse("0x1::Coin").unwrap_err();
    assert!(err.is_malformed());
    assert!(err.to_string().starts_with("Malformed struct tag"));
}

#[test]
fn test_limits_are_configurable() {
    let strict = StructTagParser::new(ParserConfig::default().with_max_nesting_depth(0));
    assert!(strict.parse("0x1::a::B").is_ok());
    assert!(matches!(
        strict.parse("0x1::a::B<0x2::c::D>"),
        Err(MoveTypeError::InputTooComplex(_))
    ));

    let long = format!("0x1::a::{}", "B".repeat(2000));
    assert!(matches!(parse(&long), Err(MoveTypeError::InputTooComplex(_))));
}

#[test]
fn test_module_address_equality_ignores_padding() {
    let a = parse("0x0001::coin::Coin").unwrap();
    let b = parse("0x1::coin::Coin").unwrap();
    assert_eq!(a, b);
    assert!(a.module.address.equals("0x000000000000000000000000000001"));
}

#[test]
fn test_address_checksum() {
    let addr =
        Address::new("0x88fbd33f54e1126269769780feb24480428179f552e2313fbe571b72e62a1ca1");
    assert_eq!(
        addr.checksum(),
        "0x88fbd33f54E1126269769780feB24480428179F552e2313FBE571b72E62A1CA1"
    );
    assert_eq!(addr.shortened(), "0x88fbd\u{2026}CA1");
    assert_eq!(Address::new("0xa550c18").checksum(), "0xa550C18");
    assert_eq!(Address::new("0x0").checksum(), "0x0");
}

#[test]
fn test_address_and_hex_string_equality_differ() {
    assert!(Address::ensure("0x000001234").equals("0x1234"));
    assert!(!HexString::ensure("0x000001234").equals("0x1234"));
    assert!(HexString::ensure("0xABCD").equals("0xabcd"));
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,8}"
}

fn canonical_address() -> impl Strategy<Value = String> {
    prop_oneof![Just("0x0".to_string()), "0x[1-9a-f][0-9a-f]{0,15}"]
}

fn struct_tag_string() -> impl Strategy<Value = String> {
    let leaf = (canonical_address(), identifier(), identifier())
        .prop_map(|(addr, module, name)| format!("{addr}::{module}::{name}"));
    leaf.prop_recursive(3, 16, 2, |inner| {
        (
            canonical_address(),
            identifier(),
            identifier(),
            prop::collection::vec(inner, 1..=2),
        )
            .prop_map(|(addr, module, name, params)| {
                format!("{addr}::{module}::{name}<{}>", params.join(", "))
            })
    })
}

proptest! {
    #[test]
    fn prop_canonical_round_trip(input in struct_tag_string()) {
        let tag = parse(&input).unwrap();
        prop_assert_eq!(format(&tag), input);
    }

    #[test]
    fn prop_format_is_a_fixed_point(input in struct_tag_string()) {
        let once = format(&parse(&input).unwrap());
        let twice = format(&parse(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_parse_never_panics(input in "[0-9a-zA-Z_:<>, ]{0,64}") {
        let _ = parse(&input);
    }

    #[test]
    fn prop_shortened_keeps_ends(digits in "[1-9a-f][0-9a-f]{20,63}") {
        let addr = Address::new(&digits);
        let checksum = addr.checksum();
        let short = addr.shortened();
        prop_assert!(short.starts_with(&checksum[..7]));
        prop_assert!(short.ends_with(&checksum[checksum.len() - 3..]));
        prop_assert!(short.contains('\u{2026}'), "short.contains('\\u{{2026}}')");
    }
}
