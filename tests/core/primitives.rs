// tests/core/primitives.rs
use ctf_converter::core::*;
use ctf_converter::ConversionError;

#[test]
fn test_every_byte_roundtrips_through_octet_hex_and_char() {
    for byte in 0..=u8::MAX {
        let octet = byte_to_octet(byte);
        assert_eq!(octet.len(), 8);
        assert_eq!(octet_to_byte(&octet).unwrap(), byte);

        let hex = byte_to_hex(byte);
        assert_eq!(hex.len(), 2);
        assert_eq!(hex_pair_to_byte(&hex).unwrap(), byte);

        assert_eq!(char_to_code(byte_to_char(byte)), u32::from(byte));
    }
}

#[test]
fn test_octet_is_msb_first() {
    assert_eq!(byte_to_octet(1), "00000001");
    assert_eq!(byte_to_octet(128), "10000000");
    assert_eq!(byte_to_octet(0x41), "01000001");
    assert_eq!(octet_to_byte("11111111").unwrap(), 255);
}

#[test]
fn test_byte_to_hex_is_lowercase_and_padded() {
    assert_eq!(byte_to_hex(5), "05");
    assert_eq!(byte_to_hex(0xab), "ab");
    assert_eq!(hex_pair_to_byte("AB").unwrap(), 0xab);
}

#[test]
fn test_char_to_code_is_not_range_checked() {
    assert_eq!(char_to_code('A'), 65);
    assert_eq!(char_to_code('€'), 0x20ac);
}

#[test]
fn test_malformed_octets_are_rejected() {
    for bad in ["0100000", "010000011", "0100002x", "", "0101 010"] {
        let err = octet_to_byte(bad).unwrap_err();
        assert!(
            matches!(&err, ConversionError::InvalidBinary(s) if s == bad),
            "unexpected error for {bad:?}: {err}"
        );
    }
}

#[test]
fn test_hex_pair_rejects_bad_digits_and_lengths() {
    assert!(matches!(
        hex_pair_to_byte("zz"),
        Err(ConversionError::InvalidHex { .. })
    ));
    assert!(matches!(
        hex_pair_to_byte("f"),
        Err(ConversionError::OddHexLength(_))
    ));
    assert!(hex_pair_to_byte("abcd").is_err());
}
