// tests/core/hex.rs
use ctf_converter::core::*;
use ctf_converter::{ConversionError, ValueMode};
use num_bigint::BigUint;

#[test]
fn test_hex_to_text_hello() {
    assert_eq!(hex_to_text("48656c6c6f").unwrap(), "Hello");
    assert_eq!(hex_to_text("48656C6C6F").unwrap(), "Hello");
}

#[test]
fn test_prefix_is_stripped() {
    assert_eq!(hex_to_decimal("0x41").unwrap(), hex_to_decimal("41").unwrap());
    assert_eq!(hex_to_decimal("0X41").unwrap(), vec![65]);
    assert_eq!(strip_hex_prefix("0xff"), "ff");
    assert_eq!(strip_hex_prefix("ff"), "ff");
}

#[test]
fn test_empty_hex_gives_empty_output() {
    assert_eq!(hex_to_text("").unwrap(), "");
    assert!(hex_to_decimal("0x").unwrap().is_empty());
}

#[test]
fn test_hex_to_binary() {
    assert_eq!(
        hex_to_binary("0aff").unwrap(),
        vec!["00001010", "11111111"]
    );
}

#[test]
fn test_non_hex_digits_fail_the_whole_call() {
    for call in [
        hex_to_text("41zz").map(|_| ()),
        hex_to_decimal("zz").map(|_| ()),
        hex_to_binary("4g").map(|_| ()),
    ] {
        assert!(matches!(call, Err(ConversionError::InvalidHex { .. })));
    }

    let err = hex_to_text("zz").unwrap_err();
    assert!(err.to_string().contains("'zz'"), "got: {err}");
}

#[test]
fn test_odd_length_is_rejected_in_per_byte_mode() {
    assert!(matches!(
        hex_to_decimal("abc"),
        Err(ConversionError::OddHexLength(s)) if s == "abc"
    ));
    assert!(hex_to_text("0x414").is_err());
}

#[test]
fn test_single_value_mode() {
    assert_eq!(hex_to_big("ff").unwrap(), BigUint::from(255u32));
    assert_eq!(hex_to_big("1ff").unwrap(), BigUint::from(511u32));
    assert_eq!(hex_to_big("0x1FF").unwrap(), BigUint::from(511u32));

    assert_eq!(
        hex_to_decimal_with("1ff", ValueMode::SingleValue).unwrap(),
        Decimals::Single(BigUint::from(511u32))
    );
    assert_eq!(
        hex_to_decimal_with("01ff", ValueMode::PerByte).unwrap(),
        Decimals::Bytes(vec![1, 255])
    );
}

#[test]
fn test_single_value_mode_handles_large_numbers() {
    let value = hex_to_big("ffffffffffffffffffffffffffffffff").unwrap();
    assert_eq!(value, BigUint::from(u128::MAX));
    assert_eq!(big_to_hex(&value), "ffffffffffffffffffffffffffffffff");
}

#[test]
fn test_single_value_mode_rejects_bad_input() {
    for bad in ["", "0x", "+ff", "f_f", "xyz"] {
        assert!(
            matches!(hex_to_big(bad), Err(ConversionError::InvalidHex { .. })),
            "{bad:?} should be rejected"
        );
    }
}
