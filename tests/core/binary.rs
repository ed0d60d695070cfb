// tests/core/binary.rs
use ctf_converter::core::*;
use ctf_converter::ConversionError;

#[test]
fn test_binary_conversions() {
    let octets = ["01001000", "01101001"];
    assert_eq!(binary_to_text(&octets).unwrap(), "Hi");
    assert_eq!(binary_to_hex(&octets).unwrap(), "4869");
    assert_eq!(binary_to_decimal(&octets).unwrap(), vec![72, 105]);
}

#[test]
fn test_any_malformed_octet_fails_before_conversion() {
    let cases: [&[&str]; 3] = [
        &["01000001", "0100001"],
        &["01000001", "010000011"],
        &["0100000a", "01000001"],
    ];
    for octets in cases {
        assert!(matches!(
            binary_to_text(octets),
            Err(ConversionError::InvalidBinary(_))
        ));
        assert!(binary_to_hex(octets).is_err());
        assert!(binary_to_decimal(octets).is_err());
    }
}

#[test]
fn test_error_names_the_offending_octet() {
    let err = validate_octets(&["00000000", "2"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Binary string must be 8 bits with only 0s and 1s: '2'"
    );
}

#[test]
fn test_owned_octets_are_accepted() {
    let octets = decimal_to_binary(&[0, 127, 255]).unwrap();
    assert_eq!(binary_to_decimal(&octets).unwrap(), vec![0, 127, 255]);
}
