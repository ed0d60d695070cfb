// src/core/primitives.rs
//! Single-value conversions between the four byte representations
//!
//! Everything else in `core` is built by chaining these.

use crate::aliases::Octet;
use crate::consts::OCTET_BITS;
use crate::core::Result;
use crate::error::ConversionError;

/// Byte → 8-character binary string, most significant bit first
pub fn byte_to_octet(byte: u8) -> Octet {
    format!("{byte:08b}")
}

/// Byte → the character with the same code point
pub fn byte_to_char(byte: u8) -> char {
    char::from(byte)
}

/// Byte → two lowercase hex digits, zero-padded
pub fn byte_to_hex(byte: u8) -> String {
    format!("{byte:02x}")
}

/// Check that `octet` is exactly 8 characters of `0`/`1`
pub fn validate_octet(octet: &str) -> Result<()> {
    let well_formed =
        octet.len() == OCTET_BITS && octet.bytes().all(|bit| bit == b'0' || bit == b'1');
    if well_formed {
        Ok(())
    } else {
        Err(ConversionError::InvalidBinary(octet.to_owned()))
    }
}

/// 8-character binary string → byte, read as big-endian
pub fn octet_to_byte(octet: &str) -> Result<u8> {
    validate_octet(octet)?;
    Ok(octet
        .bytes()
        .fold(0u8, |acc, bit| (acc << 1) | (bit - b'0')))
}

/// Character → its code point
///
/// Not range-checked: characters above U+00FF come back as values above 255
/// and are rejected only by the conversions that need a byte.
pub fn char_to_code(c: char) -> u32 {
    u32::from(c)
}

/// Exactly one hex pair → byte
pub fn hex_pair_to_byte(pair: &str) -> Result<u8> {
    let mut byte = [0u8; 1];
    hex::decode_to_slice(pair, &mut byte).map_err(|e| ConversionError::invalid_hex(pair, e))?;
    Ok(byte[0])
}
